use docsum::domain::{SummaryLength, SummarySettings, SummaryStyle};

#[test]
fn given_default_settings_when_created_then_medium_paragraph_without_instruction() {
    let settings = SummarySettings::default();

    assert_eq!(settings.length, SummaryLength::Medium);
    assert_eq!(settings.style, SummaryStyle::Paragraph);
    assert_eq!(settings.user_instruction, None);
}

#[test]
fn given_known_names_when_parsing_then_returns_variants() {
    assert_eq!("short".parse::<SummaryLength>(), Ok(SummaryLength::Short));
    assert_eq!("long".parse::<SummaryLength>(), Ok(SummaryLength::Long));
    assert_eq!("bullet".parse::<SummaryStyle>(), Ok(SummaryStyle::Bullet));
    assert_eq!("flashcard".parse::<SummaryStyle>(), Ok(SummaryStyle::Flashcard));
    assert_eq!("mindmap".parse::<SummaryStyle>(), Ok(SummaryStyle::Mindmap));
    assert_eq!("keypoints".parse::<SummaryStyle>(), Ok(SummaryStyle::Keypoints));
}

#[test]
fn given_unknown_names_when_resolving_then_falls_back_to_defaults() {
    assert_eq!(SummaryLength::from_name_or_default("huge"), SummaryLength::Medium);
    assert_eq!(SummaryStyle::from_name_or_default("haiku"), SummaryStyle::Paragraph);
}

#[test]
fn given_blank_instruction_when_creating_settings_then_instruction_is_absent() {
    let settings = SummarySettings::new(
        SummaryLength::Short,
        SummaryStyle::Bullet,
        Some("   ".to_string()),
    );

    assert_eq!(settings.user_instruction, None);
}

#[test]
fn given_settings_when_displayed_then_uses_lowercase_names() {
    assert_eq!(SummaryLength::Long.to_string(), "long");
    assert_eq!(SummaryStyle::Keypoints.to_string(), "keypoints");
}
