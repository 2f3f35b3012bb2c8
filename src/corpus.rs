//! Test-Vector Corpus
//!
//! Reads input sequences in the plain text layout emitted by the symbolic
//! execution tooling: one case per line, values separated by whitespace.
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors while loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: '{token}' is not a 32-bit signed integer")]
    Parse { line: usize, token: String },
}

/// Parse a single case; values may be separated by whitespace or commas.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_case(text: &str, line: usize) -> Result<Vec<i32>, CorpusError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|_| CorpusError::Parse {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a whole corpus, one case per non-empty, non-comment line.
pub fn parse_corpus(content: &str) -> Result<Vec<Vec<i32>>, CorpusError> {
    let mut cases = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        cases.push(parse_case(trimmed, idx + 1)?);
    }
    Ok(cases)
}

/// Read and parse the corpus file at `path`.
pub fn load_corpus(path: &Path) -> Result<Vec<Vec<i32>>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&content)
}
