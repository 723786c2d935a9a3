// src/request.rs
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

/// Form bodies larger than this are refused.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Decoded `key=value` pairs from a query string or form body, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn from_request(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or(""))
    }

    /// Reads an `application/x-www-form-urlencoded` body.
    pub fn from_form(req: &mut Request) -> Result<Self, ServerError> {
        let mut raw = String::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_string(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest("form body too large".into()));
        }
        Ok(Self::parse(&raw))
    }

    /// First value for `key`; empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Like `get`, but trimmed and defaulting to "".
    pub fn text(&self, key: &str) -> &str {
        self.get(key).map(str::trim).unwrap_or("")
    }

    pub fn index(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Pairs whose key is not in `skip`, in request order.
    pub fn pairs_except<'a>(&'a self, skip: &'a [&'a str]) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.pairs
            .iter()
            .filter(move |(k, _)| !skip.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// `path?k=v&...`, or just `path` when there are no pairs.
pub fn href<K, V>(path: &str, pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra::Body;
    use http::Method;

    #[test]
    fn parses_and_decodes() {
        let params = QueryParams::parse("?q=palm+villa&city=New%20York&empty=");
        assert_eq!(params.get("q"), Some("palm villa"));
        assert_eq!(params.get("city"), Some("New York"));
        assert_eq!(params.get("empty"), None);
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn first_value_wins() {
        let params = QueryParams::parse("img=2&img=5");
        assert_eq!(params.index("img"), Some(2));
    }

    #[test]
    fn index_rejects_garbage() {
        let params = QueryParams::parse("img=-1&t=two");
        assert_eq!(params.index("img"), None);
        assert_eq!(params.index("t"), None);
    }

    #[test]
    fn href_encodes_pairs() {
        assert_eq!(href("/properties", Vec::<(&str, &str)>::new()), "/properties");
        assert_eq!(
            href("/properties", [("q", "sea view"), ("currency", "GBP")]),
            "/properties?q=sea+view&currency=GBP"
        );
    }

    #[test]
    fn reads_form_body() {
        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri("/leads/newsletter")
            .body(Body::from("email=a%40b.com&name=Sam".as_bytes().to_vec()))
            .unwrap();

        let form = QueryParams::from_form(&mut req).unwrap();
        assert_eq!(form.get("email"), Some("a@b.com"));
        assert_eq!(form.text("name"), "Sam");
    }

    #[test]
    fn oversized_form_is_rejected() {
        let big = format!("message={}", "x".repeat(MAX_FORM_BYTES as usize + 10));
        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri("/leads/newsletter")
            .body(Body::from(big.into_bytes()))
            .unwrap();

        assert!(matches!(
            QueryParams::from_form(&mut req),
            Err(ServerError::BadRequest(_))
        ));
    }
}
