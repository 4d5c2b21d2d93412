use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two rendering modes for summary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    Bullets,
    Paragraph,
}

impl Default for SummaryFormat {
    fn default() -> Self {
        SummaryFormat::Bullets
    }
}

impl SummaryFormat {
    pub fn toggled(self) -> Self {
        match self {
            SummaryFormat::Bullets => SummaryFormat::Paragraph,
            SummaryFormat::Paragraph => SummaryFormat::Bullets,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryFormat::Bullets => "Bullet points",
            SummaryFormat::Paragraph => "Paragraph",
        }
    }
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SummaryFormat::Bullets => "bullets",
            SummaryFormat::Paragraph => "paragraph",
        })
    }
}

/// One user-initiated request to summarize a video link.
///
/// Only produced by [`Submission::parse`], so holding a `Submission` means
/// the URL already passed local validation and is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub url: String,
    pub format: SummaryFormat,
}

/// Local (pre-network) rejection of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a YouTube URL")]
    Empty,

    #[error("Please enter a valid YouTube URL")]
    NotAVideoLink,
}

impl Submission {
    /// Validate raw form input into a submission.
    ///
    /// Accepts full watch links (`youtube.com/watch?v=`) and short links
    /// (`youtu.be/`); anything else never reaches the network layer.
    pub fn parse(raw: &str, format: SummaryFormat) -> Result<Self, ValidationError> {
        let url = raw.trim();

        if url.is_empty() {
            return Err(ValidationError::Empty);
        }

        if !url.contains("youtube.com/watch?v=") && !url.contains("youtu.be/") {
            return Err(ValidationError::NotAVideoLink);
        }

        Ok(Self {
            url: url.to_string(),
            format,
        })
    }
}
