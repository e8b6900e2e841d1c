use std::fmt;

/// File formats the extraction pipeline knows how to read.
///
/// The format is decided by the filename suffix alone, compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Docx,
    Doc,
    Xlsx,
    Unsupported,
}

const SUFFIXES: [(&str, DocumentFormat); 5] = [
    (".txt", DocumentFormat::Txt),
    (".pdf", DocumentFormat::Pdf),
    (".docx", DocumentFormat::Docx),
    (".doc", DocumentFormat::Doc),
    (".xlsx", DocumentFormat::Xlsx),
];

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lowered = filename.to_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| lowered.ends_with(suffix))
            .map(|(_, format)| *format)
            .unwrap_or(Self::Unsupported)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Xlsx => "xlsx",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        *self != Self::Unsupported
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
