use thiserror::Error;

/// Rejections for submitted todo text. The display strings are shown to the
/// user verbatim on the listing page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Input cannot be empty")]
    Empty,
    #[error("Input cannot contain only symbols or special characters")]
    SymbolsOnly,
}

/// Trims the submitted text and rejects empty or pure-symbol input.
pub fn validate_text(raw: &str) -> Result<String, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if !text.chars().any(|c| c.is_alphanumeric() || c.is_whitespace()) {
        return Err(InputError::SymbolsOnly);
    }
    Ok(text.to_string())
}
