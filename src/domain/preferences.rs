// src/domain/preferences.rs

use crate::domain::currency::{self, Currency};
use crate::domain::i18n::{self, Language};
use crate::request::{href, QueryParams};

/// Site-wide display choices. Carried as `currency` and `lang` query
/// parameters so they survive in-site navigation without a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub currency: &'static Currency,
    pub language: Language,
    default_currency: &'static str,
}

impl Preferences {
    pub fn new(default_currency: &'static str) -> Self {
        Self {
            currency: currency::lookup(default_currency),
            language: Language::default(),
            default_currency,
        }
    }

    /// Unknown codes fall back to the configured currency and English.
    pub fn from_params(params: &QueryParams, default_currency: &'static str) -> Self {
        let currency = params
            .get("currency")
            .and_then(currency::find)
            .unwrap_or_else(|| currency::lookup(default_currency));
        let language = params
            .get("lang")
            .and_then(Language::parse)
            .unwrap_or_default();

        Self {
            currency,
            language,
            default_currency,
        }
    }

    pub fn with_currency(self, code: &str) -> Self {
        Self {
            currency: currency::lookup(code),
            ..self
        }
    }

    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn price(&self, price_usd: u64) -> String {
        currency::format_price(price_usd, self.currency.code)
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::t(key, self.language)
    }

    /// Only non-default choices are written out, keeping links short.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.currency.code != currency::lookup(self.default_currency).code {
            pairs.push(("currency", self.currency.code.to_string()));
        }
        if self.language != Language::default() {
            pairs.push(("lang", self.language.code().to_string()));
        }
        pairs
    }

    /// A link to `path` with `pairs` followed by the preference pairs.
    pub fn link<K, V>(&self, path: &str, pairs: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut all: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        all.extend(self.to_pairs().into_iter().map(|(k, v)| (k.to_string(), v)));
        href(path, all)
    }

    pub fn path(&self, path: &str) -> String {
        self.link(path, Vec::<(&str, &str)>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_config() {
        let prefs = Preferences::from_params(&QueryParams::default(), "AED");
        assert_eq!(prefs.currency.code, "AED");
        assert_eq!(prefs.language, Language::En);
        assert!(prefs.to_pairs().is_empty());
    }

    #[test]
    fn unknown_values_fall_back() {
        let prefs = Preferences::from_params(&QueryParams::parse("currency=EUR&lang=de"), "USD");
        assert_eq!(prefs.currency.code, "USD");
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn links_carry_choices_forward() {
        let prefs = Preferences::from_params(&QueryParams::parse("currency=gbp&lang=ar"), "USD");
        assert_eq!(prefs.path("/"), "/?currency=GBP&lang=ar");
        assert_eq!(
            prefs.link("/properties", [("city", "Dubai")]),
            "/properties?city=Dubai&currency=GBP&lang=ar"
        );
        assert_eq!(prefs.price(1_200_000), "£948,000");
    }

    #[test]
    fn switching_resets_to_default_link() {
        let prefs = Preferences::new("USD").with_currency("SAR");
        assert_eq!(prefs.path("/"), "/?currency=SAR");
        assert_eq!(prefs.with_currency("USD").path("/"), "/");
        assert_eq!(prefs.with_language(Language::Zh).t("search.button"), "搜索");
    }
}
