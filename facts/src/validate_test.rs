use super::*;

const SOURCE: &str = "http://example.com";

#[test]
fn accepts_valid_submission() {
    let fact = validate_new_fact("Water boils at 100C at sea level.", SOURCE, "Science").unwrap();
    assert_eq!(fact.source, SOURCE);
    assert_eq!(fact.category, "Science");
}

#[test]
fn rejects_empty_text() {
    assert_eq!(validate_new_fact("", SOURCE, "Science"), Err(FactError::EmptyText));
}

#[test]
fn text_limit_is_inclusive() {
    let at_limit = "a".repeat(MAX_TEXT_CHARS);
    assert!(validate_new_fact(&at_limit, SOURCE, "Science").is_ok());

    let over = "a".repeat(MAX_TEXT_CHARS + 1);
    assert_eq!(
        validate_new_fact(&over, SOURCE, "Science"),
        Err(FactError::TextTooLong { len: MAX_TEXT_CHARS + 1 })
    );
}

#[test]
fn text_limit_counts_utf16_units_not_bytes() {
    let text = "é".repeat(MAX_TEXT_CHARS);
    assert!(text.len() > MAX_TEXT_CHARS);
    assert_eq!(text_len(&text), MAX_TEXT_CHARS);
    assert!(validate_new_fact(&text, SOURCE, "Science").is_ok());
}

#[test]
fn emoji_count_as_two_units_toward_limit() {
    let text = "😀".repeat(150);
    assert_eq!(text_len(&text), 300);
    assert_eq!(remaining_chars(&text), -100);
    assert_eq!(validate_new_fact(&text, SOURCE, "Science"), Err(FactError::TextTooLong { len: 300 }));

    let at_limit = "😀".repeat(MAX_TEXT_CHARS / 2);
    assert!(validate_new_fact(&at_limit, SOURCE, "Science").is_ok());
}

#[test]
fn rejects_non_http_sources() {
    for source in ["not-a-url", "", "example.com", "ftp://example.com/file", "/relative/path", "mailto:a@b.com"] {
        assert_eq!(
            validate_new_fact("text", source, "Science"),
            Err(FactError::InvalidSource(source.to_owned())),
            "source {source:?} should be rejected"
        );
    }
}

#[test]
fn accepts_http_and_https_sources() {
    assert!(is_valid_http_url("http://example.com"));
    assert!(is_valid_http_url("https://example.com/path?q=1#frag"));
    assert!(is_valid_http_url("HTTPS://EXAMPLE.COM"));
}

#[test]
fn rejects_missing_or_unknown_category() {
    assert_eq!(validate_new_fact("text", SOURCE, ""), Err(FactError::EmptyCategory));
    assert_eq!(
        validate_new_fact("text", SOURCE, "Gardening"),
        Err(FactError::UnknownCategory("Gardening".to_owned()))
    );
}

#[test]
fn remaining_chars_goes_negative_past_limit() {
    assert_eq!(remaining_chars(""), 200);
    assert_eq!(remaining_chars("abc"), 197);
    assert_eq!(remaining_chars(&"x".repeat(205)), -5);
}
