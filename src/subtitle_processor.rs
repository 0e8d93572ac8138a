use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::errors::SubtitleError;

// @module: Subtitle ingestion (SRT cue text extraction)

// @const: SRT timestamp line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}\s*-->\s*\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}").unwrap()
});

// @struct: Cue parsing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CueState {
    // @state: Between cues, an index line may follow
    ExpectIndex,
    // @state: Index seen, a timestamp line should follow
    ExpectTimestamp,
    // @state: Inside the cue text
    Text,
}

/// Line-by-line SRT state machine producing one raw line per cue.
///
/// Index and timestamp lines are discarded; the text lines of a cue are
/// joined with `\n` so that per-line markup (dialogue dashes) stays visible
/// to the cleaner.
#[derive(Debug)]
pub struct CueAccumulator {
    state: CueState,
    current: Vec<String>,
    cues: Vec<String>,
    line_count: usize,
}

impl Default for CueAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CueAccumulator {
    pub fn new() -> Self {
        Self {
            state: CueState::ExpectIndex,
            current: Vec::new(),
            cues: Vec::new(),
            line_count: 0,
        }
    }

    /// Feed one physical line of the subtitle file
    pub fn push_line(&mut self, line: &str) {
        self.line_count += 1;
        let trimmed = line.trim_start_matches('\u{feff}').trim();

        if trimmed.is_empty() {
            self.flush();
            self.state = CueState::ExpectIndex;
            return;
        }

        match self.state {
            CueState::ExpectIndex if trimmed.chars().all(|c| c.is_ascii_digit()) => {
                self.state = CueState::ExpectTimestamp;
            }
            CueState::ExpectIndex | CueState::ExpectTimestamp if TIMESTAMP_REGEX.is_match(trimmed) => {
                self.state = CueState::Text;
            }
            CueState::ExpectTimestamp => {
                // Index without timestamp; keep the text rather than drop dialogue
                warn!("Missing timestamp at line {}: {}", self.line_count, trimmed);
                self.current.push(trimmed.to_string());
                self.state = CueState::Text;
            }
            CueState::ExpectIndex | CueState::Text => {
                self.current.push(trimmed.to_string());
                self.state = CueState::Text;
            }
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.cues.push(self.current.join("\n"));
            self.current.clear();
        }
    }

    /// Finish parsing and return the cue texts in file order
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        debug!("Ingested {} cues from {} lines", self.cues.len(), self.line_count);
        self.cues
    }
}

/// Extract cue texts from in-memory SRT content
pub fn cue_texts_from_str(content: &str) -> Vec<String> {
    let mut accumulator = CueAccumulator::new();
    for line in content.lines() {
        accumulator.push_line(line);
    }
    accumulator.finish()
}

// @struct: Streaming subtitle file reader
pub struct SubtitleReader;

impl SubtitleReader {
    /// Read the cue texts of an SRT file.
    ///
    /// The file is streamed line by line so memory use is bounded by the
    /// longest line, not by the file size.
    pub async fn read_cue_texts<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SubtitleError> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .map_err(|e| SubtitleError::from_read(path, 0, e))?;

        let mut lines = BufReader::new(file).lines();
        let mut accumulator = CueAccumulator::new();
        let mut line_number = 0;

        loop {
            line_number += 1;
            match lines.next_line().await {
                Ok(Some(line)) => accumulator.push_line(&line),
                Ok(None) => break,
                Err(e) => return Err(SubtitleError::from_read(path, line_number, e)),
            }
        }

        Ok(accumulator.finish())
    }
}
