use maud::{html, Markup};
use url::Url;

/// `https://wa.me/{number}`, with a prefilled message when `text` is given.
pub fn whatsapp_link(number: &str, text: Option<&str>) -> String {
    let base = format!("https://wa.me/{number}");
    let Ok(mut url) = Url::parse(&base) else {
        return base;
    };
    if let Some(text) = text {
        url.query_pairs_mut().append_pair("text", text);
    }
    url.into()
}

pub fn interest_message(title: &str) -> String {
    format!("Hi, I'm interested in {title}")
}

/// Floating chat button shown on every page.
pub fn whatsapp_button(number: &str) -> Markup {
    html! {
        a href=(whatsapp_link(number, None))
          target="_blank"
          rel="noopener noreferrer"
          class="whatsapp-float"
          aria-label="WhatsApp" {
            svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor" {
                path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" {}
            }
        }
    }
}
