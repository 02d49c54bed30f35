//! MakeSrt - SRT subtitles from timestamped word transcripts
//!
//! A Rust implementation of a subtitle generator that converts the word-level
//! timing output of a speech-to-text engine into SubRip (SRT) subtitle files.

pub mod cli;
pub mod config;
pub mod error;
pub mod srt;
pub mod transcript;
pub mod workflow;
