use docsum::domain::truncate_chars;

#[test]
fn given_short_text_when_truncating_then_returns_whole_text() {
    assert_eq!(truncate_chars("hello", 10), "hello");
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn given_long_text_when_truncating_then_keeps_leading_chars() {
    assert_eq!(truncate_chars("hello world", 5), "hello");
}

#[test]
fn given_multibyte_text_when_truncating_then_counts_characters_not_bytes() {
    assert_eq!(truncate_chars("ééééé", 3), "ééé");
    assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
}
