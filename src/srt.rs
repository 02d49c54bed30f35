use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::{MakeSrtError, Result};
use crate::transcript::{validate_words, Word};

/// Padding (seconds) added to a cue's end so it lingers slightly past the
/// last spoken word
pub const SECTION_END_EXTRA_SECS: f64 = 0.5;

/// One subtitle entry with a time range and display text
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// 0-based ordinal in output order; rendered 1-based in the SRT text
    pub index: usize,
    pub start_sec: f64,
    pub end_sec: f64,
    pub text: String,
}

/// Partition a word sequence into subtitle cues.
///
/// A cue boundary is forced before a word when the silence gap since the
/// previous word reaches `endpoint_sec`, or when the current cue already
/// holds `length_limit` words. Both conditions firing at the same word
/// still produce a single boundary.
pub fn segment_words(
    words: &[Word],
    endpoint_sec: f64,
    length_limit: Option<usize>,
) -> Result<Vec<Cue>> {
    validate_thresholds(endpoint_sec, length_limit)?;

    if words.is_empty() {
        return Ok(Vec::new());
    }
    validate_words(words)?;

    let mut cues = Vec::new();
    let mut cue_start = 0;

    for end in 1..words.len() {
        let gap = words[end].start_sec - words[end - 1].end_sec;
        let silence_split = gap >= endpoint_sec;
        let length_split = length_limit.is_some_and(|limit| end - cue_start >= limit);

        if silence_split || length_split {
            cues.push(build_cue(words, cues.len(), cue_start, end));
            cue_start = end;
        }
    }
    cues.push(build_cue(words, cues.len(), cue_start, words.len()));

    Ok(cues)
}

/// Build the cue for the half-open word range `[start, end)`.
///
/// The end padding is clamped to the next word's start so cues never
/// overlap; the final cue keeps the full padding.
fn build_cue(words: &[Word], index: usize, start: usize, end: usize) -> Cue {
    let start_sec = words[start].start_sec;
    let mut end_sec = words[end - 1].end_sec + SECTION_END_EXTRA_SECS;
    if end < words.len() {
        end_sec = end_sec.min(words[end].start_sec);
    }

    let text = words[start..end]
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Cue {
        index,
        start_sec,
        end_sec,
        text,
    }
}

/// Render a word sequence as SRT subtitle text.
///
/// Each cue becomes a numbered block of four lines (1-based number,
/// timecode line, text, blank line); blocks are joined with newlines.
/// Empty input yields an empty string.
pub fn render_srt(
    words: &[Word],
    endpoint_sec: f64,
    length_limit: Option<usize>,
) -> Result<String> {
    let cues = segment_words(words, endpoint_sec, length_limit)?;

    let mut lines = Vec::with_capacity(cues.len() * 4);
    for cue in &cues {
        lines.push((cue.index + 1).to_string());
        lines.push(format!(
            "{} --> {}",
            second_to_timecode(cue.start_sec),
            second_to_timecode(cue.end_sec)
        ));
        lines.push(cue.text.clone());
        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}

/// Render a word sequence and write the SRT text to a file
pub async fn write_srt<P: AsRef<Path>>(
    words: &[Word],
    endpoint_sec: f64,
    length_limit: Option<usize>,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    info!("Generating SRT file: {}", output_path.display());

    let srt_content = render_srt(words, endpoint_sec, length_limit)?;

    fs::write(output_path, srt_content)
        .await
        .map_err(MakeSrtError::Io)?;

    info!("SRT file generated successfully");
    Ok(())
}

fn validate_thresholds(endpoint_sec: f64, length_limit: Option<usize>) -> Result<()> {
    if !endpoint_sec.is_finite() || endpoint_sec < 0.0 {
        return Err(MakeSrtError::InvalidArgument(format!(
            "endpoint_sec must be finite and non-negative, got {}",
            endpoint_sec
        )));
    }

    if let Some(limit) = length_limit {
        if limit < 1 {
            return Err(MakeSrtError::InvalidArgument(
                "length_limit must be at least 1".to_string(),
            ));
        }
    }

    Ok(())
}

/// Format time in seconds to SRT timecode format (HH:MM:SS,mmm).
///
/// The millisecond component is truncated, not rounded, and the hour field
/// grows past two digits for inputs beyond 99 hours.
pub fn second_to_timecode(x: f64) -> String {
    let hour = (x / 3600.0).floor();
    let x = x - hour * 3600.0;
    let minute = (x / 60.0).floor();
    let x = x - minute * 60.0;
    let second = x.floor();
    let millisecond = ((x - second) * 1000.0).floor();

    format!(
        "{:02}:{:02}:{:02},{:03}",
        hour as u64, minute as u64, second as u64, millisecond as u64
    )
}
