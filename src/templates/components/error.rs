use maud::{html, Markup, DOCTYPE};

/// Standalone error page, used where no page context is available.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}

/// Empty-state panel for listings and other lists.
pub fn empty_state(message: &str) -> Markup {
    html! {
        div class="empty-state" {
            p { (message) }
        }
    }
}
