use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::error::{MakeSrtError, Result};

/// A single recognized word with its spoken time range, as reported by a
/// speech-to-text engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start_sec: f64,
    pub end_sec: f64,
    /// Recognition confidence, when the engine reports one; not used for
    /// segmentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Engine-agnostic transcript document produced by an external
/// speech-recognition collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub words: Vec<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Transcript {
    /// Load a transcript from a JSON word-timings file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MakeSrtError::FileNotFound(path.display().to_string()));
        }

        info!("Loading transcript: {}", path.display());
        let content = fs::read_to_string(path).await?;
        let transcript: Transcript = serde_json::from_str(&content)?;
        info!("Loaded {} words", transcript.words.len());

        Ok(transcript)
    }
}

/// Check the word sequence invariant: every word has a non-negative duration
/// and start times never decrease. Fails on the first violation.
pub fn validate_words(words: &[Word]) -> Result<()> {
    for (i, word) in words.iter().enumerate() {
        if word.end_sec < word.start_sec {
            return Err(MakeSrtError::InvalidInput(format!(
                "word {} ({:?}) ends at {} before it starts at {}",
                i, word.word, word.end_sec, word.start_sec
            )));
        }
        if i > 0 && word.start_sec < words[i - 1].start_sec {
            return Err(MakeSrtError::InvalidInput(format!(
                "word {} ({:?}) starts at {} before previous word's start {}",
                i,
                word.word,
                word.start_sec,
                words[i - 1].start_sec
            )));
        }
    }
    Ok(())
}
