use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON word list must be an array of strings or an object keyed by words")]
    JsonShape,
}

/// The vocabulary available to fill a grid: ASCII uppercase words, sorted and
/// deduplicated.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Reads one word per line. Blank lines and words with non-alphabetic
    /// characters are skipped.
    pub fn from_text(text: &str) -> Wordlist {
        Wordlist::build(text.lines().map(str::to_owned).collect())
    }

    /// Reads either a JSON array of words or a JSON object whose keys are
    /// words, the common shapes of published crossword lists.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Wordlist, WordlistError> {
        let json: serde_json::Value = serde_json::from_reader(reader)?;
        let raw: Vec<String> = match &json {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or(WordlistError::JsonShape)
                })
                .collect::<Result<_, _>>()?,
            serde_json::Value::Object(entries) => entries.keys().cloned().collect(),
            _ => return Err(WordlistError::JsonShape),
        };
        Ok(Wordlist::build(raw))
    }

    /// Loads a word list from disk, picking the format by file extension:
    /// `.json` as JSON, anything else as plain text.
    pub fn load(path: &Path) -> Result<Wordlist, WordlistError> {
        if path.extension().map_or(false, |ext| ext == "json") {
            let file = File::open(path)?;
            Wordlist::from_json_reader(BufReader::new(file))
        } else {
            let text = std::fs::read_to_string(path)?;
            Ok(Wordlist::from_text(&text))
        }
    }

    fn build(raw: Vec<String>) -> Wordlist {
        let mut words: Vec<String> = raw.iter().filter_map(|raw| normalize(raw)).collect();
        words.sort();
        words.dedup();
        Wordlist { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}
