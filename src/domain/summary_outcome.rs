/// Result of summarizing one uploaded file. Carries either a summary or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summarized { file_name: String, summary: String },
    Failed { file_name: String, error: String },
}

impl SummaryOutcome {
    pub fn summarized(file_name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::Summarized {
            file_name: file_name.into(),
            summary: summary.into(),
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed {
            file_name: file_name.into(),
            error: error.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Self::Summarized { file_name, .. } | Self::Failed { file_name, .. } => file_name,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Summarized { summary, .. } => Some(summary),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Summarized { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Summarized { .. })
    }
}

/// Outcomes of one batch, index-aligned with the uploaded files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchResult {
    outcomes: Vec<SummaryOutcome>,
}

impl BatchResult {
    pub fn new(outcomes: Vec<SummaryOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[SummaryOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<SummaryOutcome> {
        self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }
}
