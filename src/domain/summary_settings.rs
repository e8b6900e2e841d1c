use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }

    /// Unknown names fall back to the default length.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            _ => Err(format!("Invalid summary length: {}", s)),
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryStyle {
    #[default]
    Paragraph,
    Bullet,
    Flashcard,
    Mindmap,
    Keypoints,
}

impl SummaryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Paragraph => "paragraph",
            SummaryStyle::Bullet => "bullet",
            SummaryStyle::Flashcard => "flashcard",
            SummaryStyle::Mindmap => "mindmap",
            SummaryStyle::Keypoints => "keypoints",
        }
    }

    /// Unknown names fall back to the default style.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraph" => Ok(SummaryStyle::Paragraph),
            "bullet" => Ok(SummaryStyle::Bullet),
            "flashcard" => Ok(SummaryStyle::Flashcard),
            "mindmap" => Ok(SummaryStyle::Mindmap),
            "keypoints" => Ok(SummaryStyle::Keypoints),
            _ => Err(format!("Invalid summary style: {}", s)),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-request summary settings. Built once and shared read-only by every file in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarySettings {
    pub length: SummaryLength,
    pub style: SummaryStyle,
    pub user_instruction: Option<String>,
}

impl SummarySettings {
    pub fn new(
        length: SummaryLength,
        style: SummaryStyle,
        user_instruction: Option<String>,
    ) -> Self {
        Self {
            length,
            style,
            user_instruction: user_instruction.filter(|s| !s.trim().is_empty()),
        }
    }
}
