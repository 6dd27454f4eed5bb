use crate::domain::todo::TodoItem;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    pub items: Vec<TodoItem>,
    pub total_pages: usize,
}

/// Filters a list snapshot by case-insensitive substring match and slices
/// out one page. Bounds are clamped, so an out-of-range page yields an empty
/// page rather than an error. Insertion order is preserved.
pub fn paginate(items: &[TodoItem], keyword: &str, page: usize, page_size: usize) -> TodoPage {
    let keyword = keyword.trim();
    let filtered: Vec<&TodoItem> = if keyword.is_empty() {
        items.iter().collect()
    } else {
        let needle = keyword.to_lowercase();
        items
            .iter()
            .filter(|t| t.text.to_lowercase().contains(&needle))
            .collect()
    };

    let total = filtered.len();
    let total_pages = total.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    TodoPage {
        items: filtered[start..end].iter().map(|t| (*t).clone()).collect(),
        total_pages,
    }
}
