use crate::config::SiteConfig;
use crate::domain::content::{FOOTER_COLUMNS, NAV_MENU};
use crate::domain::currency::CURRENCIES;
use crate::domain::i18n::Language;
use crate::domain::Preferences;
use crate::request::QueryParams;
use crate::templates::components::lead_forms::FormState;
use crate::templates::components::{newsletter_form, whatsapp_button, whatsapp_link};
use maud::{html, Markup, DOCTYPE};

/// What every full page needs besides its own content.
pub struct PageContext<'a> {
    pub prefs: Preferences,
    pub config: &'a SiteConfig,
    pub path: &'a str,
    pub params: &'a QueryParams,
}

impl<'a> PageContext<'a> {
    /// The current page with its state kept and the preferences swapped.
    pub fn switch_href(&self, prefs: Preferences) -> String {
        prefs.link(self.path, self.params.pairs_except(&["currency", "lang"]))
    }
}

pub fn desktop_layout(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    let prefs = &ctx.prefs;

    html! {
        (DOCTYPE)
        html lang=(prefs.language.code()) dir=(prefs.language.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Kingdom International" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="navbar" {
                    a href=(prefs.path("/")) class="logo" {
                        img src="/static/img/logo.png" alt="Kingdom International";
                    }
                    nav {
                        ul {
                            @for (label, path, status) in NAV_MENU.iter() {
                                li { a href=(prefs.link(path, status.map(|s| ("status", s)))) { (label) } }
                            }
                        }
                    }
                    div class="navbar-actions" {
                        div class="switcher currency-switch" {
                            @for c in CURRENCIES.iter() {
                                a href=(ctx.switch_href(prefs.with_currency(c.code)))
                                  class=(active_class(c.code == prefs.currency.code)) {
                                    (c.code)
                                }
                            }
                        }
                        div class="switcher language-switch" {
                            @for lang in Language::ALL {
                                a href=(ctx.switch_href(prefs.with_language(lang)))
                                  hreflang=(lang.code())
                                  class=(active_class(lang == prefs.language)) {
                                    (lang.native_name())
                                }
                            }
                        }
                        a href=(whatsapp_link(&ctx.config.whatsapp_number, None))
                          target="_blank" rel="noopener noreferrer" class="btn btn-primary" {
                            "Contact Us"
                        }
                    }
                }

                (content)

                footer class="footer" {
                    section class="footer-newsletter" {
                        h3 { (prefs.t("newsletter.title")) }
                        p { "Market insights and new launches, once a month." }
                        (newsletter_form(prefs, &FormState::default()))
                    }
                    div class="footer-columns" {
                        @for (heading, links) in FOOTER_COLUMNS.iter() {
                            div class="footer-column" {
                                h4 { (heading) }
                                ul {
                                    @for link in links.iter() {
                                        li { a href=(prefs.path("/")) { (link) } }
                                    }
                                }
                            }
                        }
                    }
                    div class="footer-bottom" {
                        p { "Call us: " a href=(format!("tel:{}", ctx.config.contact_phone.replace(' ', ""))) { (ctx.config.contact_phone) } }
                        p { "© Kingdom International. " (prefs.t("footer.rights")) }
                    }
                }

                (whatsapp_button(&ctx.config.whatsapp_number))
            }
        }
    }
}

pub fn active_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}
