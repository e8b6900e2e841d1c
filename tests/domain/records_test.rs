use docsum::domain::{
    MAX_STORED_ORIGINAL_CHARS, SummaryOutcome, SummaryRecord, SummarySettings, UserId,
};

#[test]
fn given_long_original_text_when_creating_record_then_stores_first_5000_chars() {
    let text = "x".repeat(12_000);

    let record = SummaryRecord::new(
        UserId::from_i64(7),
        "big.txt".to_string(),
        &text,
        "short".to_string(),
        SummarySettings::default(),
    );

    assert_eq!(MAX_STORED_ORIGINAL_CHARS, 5_000);
    assert_eq!(record.original_text.chars().count(), 5_000);
}

#[test]
fn given_short_original_text_when_creating_record_then_stores_it_whole() {
    let record = SummaryRecord::new(
        UserId::from_i64(7),
        "small.txt".to_string(),
        "tiny",
        "summary".to_string(),
        SummarySettings::default(),
    );

    assert_eq!(record.original_text, "tiny");
}

#[test]
fn given_outcomes_when_inspected_then_carry_summary_or_error_exclusively() {
    let ok = SummaryOutcome::summarized("a.txt", "done");
    let failed = SummaryOutcome::failed("b.pdf", "boom");

    assert_eq!(ok.summary(), Some("done"));
    assert_eq!(ok.error(), None);
    assert!(ok.is_success());
    assert_eq!(failed.summary(), None);
    assert_eq!(failed.error(), Some("boom"));
    assert_eq!(failed.file_name(), "b.pdf");
}
