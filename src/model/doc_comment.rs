//! Extraction of plain text from XML doc comments.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static RE_SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<summary\b[^>]*>(?P<c>.*?)</summary>").expect("summary pattern is valid")
});
#[allow(clippy::expect_used)]
static RE_EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<example\b[^>]*>(?P<c>.*?)</example>").expect("example pattern is valid")
});
#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("tag pattern is valid"));
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Text of the first `<summary>` element, or an empty string.
pub fn summary(xml: Option<&str>) -> String {
    first_element(&RE_SUMMARY, xml)
}

/// Text of the first `<example>` element, or an empty string.
pub fn example(xml: Option<&str>) -> String {
    first_element(&RE_EXAMPLE, xml)
}

fn first_element(pattern: &Regex, xml: Option<&str>) -> String {
    xml.filter(|xml| !xml.trim().is_empty())
        .and_then(|xml| pattern.captures(xml))
        .and_then(|captures| captures.name("c"))
        .map(|content| normalize(content.as_str()))
        .unwrap_or_default()
}

fn normalize(content: &str) -> String {
    let without_tags = RE_TAG.replace_all(content, "");
    let unescaped = decode_entities(&without_tags);
    RE_WHITESPACE.replace_all(&unescaped, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
