use axum::response::Html;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::types::TodoPageView;

const STYLE: &str = "<style>\n\
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }\n\
    form { margin: 0.5rem 0; }\n\
    ul { list-style: none; padding: 0; }\n\
    li { padding: 0.25rem 0; }\n\
    li a { margin-left: 0.5rem; }\n\
    .flash.error { color: #b00020; }\n\
    .flash.success { color: #1b6e20; }\n\
    .pager span { margin: 0 0.5rem; }\n\
    </style>\n";

/// Renders the listing page for one view-model. Pagination arithmetic for
/// the Prev/Next links is computed here from `page`/`total_pages`.
pub fn index(view: &TodoPageView) -> Html<String> {
    let mut page = String::with_capacity(2048);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Todo List</title>\n");
    page.push_str(STYLE);
    page.push_str("</head>\n<body>\n<h1>Todo List</h1>\n");

    if let Some(msg) = &view.error {
        page.push_str(&format!("<p class=\"flash error\">{}</p>\n", escape(msg)));
    }
    if let Some(msg) = &view.success {
        page.push_str(&format!("<p class=\"flash success\">{}</p>\n", escape(msg)));
    }

    page.push_str(&format!(
        "<form method=\"GET\" action=\"/\">\n<input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search todos\">\n<button type=\"submit\">Search</button>\n</form>\n",
        escape(&view.keyword)
    ));
    page.push_str(
        "<form method=\"POST\" action=\"/add\">\n<input type=\"text\" name=\"todo\" placeholder=\"What needs doing?\">\n<button type=\"submit\">Add</button>\n</form>\n",
    );

    if view.todos.is_empty() {
        page.push_str("<p class=\"empty\">Nothing here.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for todo in &view.todos {
            page.push_str("<li>");
            if todo.done {
                page.push_str(&format!("<s>{}</s>", escape(&todo.text)));
            } else {
                page.push_str(&format!(
                    "{}<a href=\"/done?id={}\">Done</a>",
                    escape(&todo.text),
                    todo.id
                ));
            }
            page.push_str(&format!("<a href=\"/delete?id={}\">Delete</a></li>\n", todo.id));
        }
        page.push_str("</ul>\n");
    }

    if view.total_pages > 1 {
        page.push_str("<nav class=\"pager\">\n");
        if view.page > 1 {
            page.push_str(&format!(
                "<a href=\"{}\">Prev</a>\n",
                page_href(&view.keyword, view.page - 1)
            ));
        }
        page.push_str(&format!("<span>Page {} of {}</span>\n", view.page, view.total_pages));
        if view.page < view.total_pages {
            page.push_str(&format!(
                "<a href=\"{}\">Next</a>\n",
                page_href(&view.keyword, view.page + 1)
            ));
        }
        page.push_str("</nav>\n");
    }

    page.push_str("<p><a href=\"/clear\">Clear all</a></p>\n</body>\n</html>\n");
    Html(page)
}

fn page_href(keyword: &str, page: usize) -> String {
    if keyword.is_empty() {
        format!("/?page={page}")
    } else {
        format!("/?q={}&page={}", utf8_percent_encode(keyword, NON_ALPHANUMERIC), page)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
