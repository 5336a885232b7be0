use super::provider::{Provider, QUERY_PLACEHOLDER};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::OnceLock;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Bytes left alone by a browser's `encodeURIComponent`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(https?://)?([a-z0-9_-]+\.)+[a-z0-9_-]{2,}(/\S*)?$")
            .expect("Invalid URL Regex")
    })
}

/// Conservative check for input that should be opened as-is rather than searched.
///
/// Only `http`/`https` schemes and dotted hostnames whose last label has at
/// least two characters are accepted, so `localhost:3000` or `a.b` are
/// searched instead of visited.
pub fn looks_like_url(input: &str) -> bool {
    url_regex().is_match(input)
}

pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ENCODE_SET).to_string()
}

/// Final URL for `input`: the input itself when it looks like a URL, otherwise
/// the provider's template with the encoded input substituted.
pub fn resolve(provider: &Provider, input: &str) -> String {
    match url_regex().captures(input) {
        Some(caps) if caps.get(1).is_some() => input.to_string(),
        Some(_) => format!("https://{input}"),
        None => provider
            .url_template
            .replacen(QUERY_PLACEHOLDER, &encode_query(input), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::ProviderRegistry;

    fn brave() -> Provider {
        *ProviderRegistry::builtin().get('b').unwrap()
    }

    #[test]
    fn test_looks_like_url_accepts_hosts() {
        for input in [
            "example.com",
            "www.example.com",
            "https://example.com",
            "http://sub.domain.example.org/path?x=1",
            "HTTPS://EXAMPLE.COM",
            "docs.rs/regex/latest",
            "my-site.co.uk",
        ] {
            assert!(looks_like_url(input), "{input}");
        }
    }

    #[test]
    fn test_looks_like_url_rejects_queries() {
        for input in [
            "",
            "hello world",
            "rust",
            "a.b",
            "localhost",
            "example.com and more",
            "ftp://example.com",
            "what is example.com",
        ] {
            assert!(!looks_like_url(input), "{input}");
        }
    }

    #[test]
    fn test_encode_query_matches_uri_component_encoding() {
        assert_eq!(encode_query("hello world"), "hello%20world");
        assert_eq!(encode_query("a+b&c=d"), "a%2Bb%26c%3Dd");
        assert_eq!(encode_query("it's (fine)!*~._-"), "it's%20(fine)!*~._-");
        assert_eq!(encode_query("café"), "caf%C3%A9");
        assert_eq!(encode_query("#/?"), "%23%2F%3F");
    }

    #[test]
    fn test_resolve_prefixes_bare_hosts() {
        assert_eq!(resolve(&brave(), "example.com"), "https://example.com");
        assert_eq!(resolve(&brave(), "http://example.com"), "http://example.com");
        assert_eq!(
            resolve(&brave(), "https://example.com/a/b"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn test_resolve_substitutes_queries() {
        assert_eq!(
            resolve(&brave(), "hello world"),
            "https://search.brave.com/search?q=hello%20world"
        );
        assert_eq!(resolve(&brave(), ""), "https://search.brave.com/search?q=");
    }

    #[test]
    fn test_resolve_does_not_expand_placeholder_in_query() {
        assert_eq!(
            resolve(&brave(), "100%s"),
            "https://search.brave.com/search?q=100%25s"
        );
    }
}
