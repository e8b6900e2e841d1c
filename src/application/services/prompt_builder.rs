use crate::domain::{SummaryLength, SummarySettings, SummaryStyle, truncate_chars};

/// Hard cap on the number of source characters embedded in a prompt.
pub const MAX_PROMPT_TEXT_CHARS: usize = 15_000;

pub fn length_directive(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => "100-150 words",
        SummaryLength::Medium => "250-300 words",
        SummaryLength::Long => "500-600 words",
    }
}

pub fn style_directive(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Paragraph => "Write in clear, flowing paragraphs.",
        SummaryStyle::Bullet => "Use bullet points with • symbol. Start each point on a new line.",
        SummaryStyle::Flashcard => "Format as Q&A flashcards. Use 'Q:' and 'A:' prefixes.",
        SummaryStyle::Mindmap => {
            "Create a hierarchical structure with main topics and subtopics using indentation."
        }
        SummaryStyle::Keypoints => "List the key points numbered 1, 2, 3, etc.",
    }
}

/// Builds the summarization prompt for `text`.
///
/// Text longer than [`MAX_PROMPT_TEXT_CHARS`] is cut to its first
/// [`MAX_PROMPT_TEXT_CHARS`] characters. The user instruction line is left
/// blank when no instruction was given.
pub fn build_summary_prompt(text: &str, settings: &SummarySettings) -> String {
    let source = truncate_chars(text, MAX_PROMPT_TEXT_CHARS);
    if source.len() < text.len() {
        tracing::info!(
            max_chars = MAX_PROMPT_TEXT_CHARS,
            "Text truncated before summarization"
        );
    }

    let instruction_line = settings
        .user_instruction
        .as_deref()
        .map(|instruction| format!("Additional instructions: {instruction}"))
        .unwrap_or_default();

    format!(
        "Summarize the following text.\n\
         Length: {length}\n\
         Style: {style}\n\
         {instruction_line}\n\
         \n\
         Text to summarize:\n\
         {source}\n\
         \n\
         Summary:",
        length = length_directive(settings.length),
        style = style_directive(settings.style),
    )
}
