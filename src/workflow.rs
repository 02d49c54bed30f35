use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{MakeSrtError, Result};
use crate::srt::{render_srt, write_srt};
use crate::transcript::Transcript;

pub struct Workflow {
    config: Config,
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render a single transcript file into SRT subtitle text, written to
    /// the given output path or to stdout when none is given
    pub async fn render_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Option<&Path>,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        info!("Rendering transcript: {}", input_path.display());

        let transcript = Transcript::from_file(input_path).await?;
        let segment = &self.config.segment;

        match output_path {
            Some(path) => {
                write_srt(
                    &transcript.words,
                    segment.endpoint_sec,
                    segment.length_limit,
                    path,
                )
                .await?;
            }
            None => {
                let srt =
                    render_srt(&transcript.words, segment.endpoint_sec, segment.length_limit)?;
                println!("{}", srt);
            }
        }

        Ok(())
    }

    /// Render all transcript files in a directory
    pub async fn render_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Option<Q>,
    ) -> Result<()> {
        let input_dir = input_dir.as_ref();
        info!("Rendering directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            return Err(MakeSrtError::Config(
                "Input path is not a directory".to_string(),
            ));
        }

        // Determine output directory
        let output_dir = match output_dir {
            Some(dir) => dir.as_ref().to_path_buf(),
            None => input_dir.to_path_buf(),
        };

        // Create output directory if it doesn't exist
        fs::create_dir_all(&output_dir).await?;

        // Find transcript files
        let mut transcript_files = Vec::new();
        for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
            if let Some(extension) = entry.path().extension() {
                if extension.eq_ignore_ascii_case("json") {
                    transcript_files.push(entry.path().to_path_buf());
                }
            }
        }

        info!("Found {} transcript files to render", transcript_files.len());

        // Render each transcript file
        for transcript_path in transcript_files {
            let srt_path = srt_output_path(&transcript_path, &output_dir);
            match self.render_file(&transcript_path, Some(&srt_path)).await {
                Ok(_) => info!("Successfully rendered: {}", transcript_path.display()),
                Err(e) => warn!("Failed to render {}: {}", transcript_path.display(), e),
            }
        }

        Ok(())
    }
}

/// Derive the output SRT path for a transcript file inside the output
/// directory
fn srt_output_path(transcript_path: &Path, output_dir: &Path) -> PathBuf {
    let file_name = transcript_path
        .with_extension("srt")
        .file_name()
        .unwrap_or_default()
        .to_os_string();
    output_dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srt_output_path_replaces_extension() {
        let out = srt_output_path(Path::new("/in/talk.json"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/talk.srt"));
    }

    #[tokio::test]
    async fn test_render_file_writes_srt() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("talk.json");
        let output = dir.path().join("talk.srt");

        let json = r#"{"words": [
            {"word": "Hello", "start_sec": 0.0, "end_sec": 0.5},
            {"word": "world", "start_sec": 0.6, "end_sec": 1.0}
        ]}"#;
        std::fs::write(&input, json).unwrap();

        let workflow = Workflow::new(Config::default());
        workflow.render_file(&input, Some(&output)).await.unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("Hello world"));
        assert!(content.contains("00:00:00,000 --> 00:00:01,500"));
    }

    #[tokio::test]
    async fn test_render_directory_converts_all_transcripts() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");

        for name in ["a", "b"] {
            let json = r#"{"words": [{"word": "Hi", "start_sec": 0.0, "end_sec": 0.3}]}"#;
            std::fs::write(dir.path().join(format!("{}.json", name)), json).unwrap();
        }

        let workflow = Workflow::new(Config::default());
        workflow
            .render_directory(dir.path(), Some(&out_dir))
            .await
            .unwrap();

        assert!(out_dir.join("a.srt").exists());
        assert!(out_dir.join("b.srt").exists());
    }
}
