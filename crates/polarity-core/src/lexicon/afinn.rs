//! AFINN word list loading.
//!
//! AFINN files hold one `word<TAB>score` entry per line. Entries may be
//! multi-word phrases; they are stored but never match a single token.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{PolarityError, PolarityResult};

use super::WordListLexicon;

impl WordListLexicon {
    /// Parse AFINN-formatted text.
    ///
    /// Blank lines and lines starting with `#` are skipped. A later entry for
    /// the same word replaces an earlier one.
    ///
    /// # Errors
    ///
    /// [`PolarityError::LexiconParse`] for a line without a tab separator, an
    /// empty word, or an unparsable score; [`PolarityError::InvalidScore`] for
    /// a non-finite score.
    pub fn parse_afinn(text: &str) -> PolarityResult<Self> {
        let mut lexicon = Self::new();
        let mut phrases = 0usize;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let (word, score) = line
                .rsplit_once('\t')
                .ok_or_else(|| PolarityError::parse(line_no, "expected `word<TAB>score`"))?;

            let word = word.trim();
            if word.is_empty() {
                return Err(PolarityError::parse(line_no, "empty word"));
            }

            let score: f64 = score.trim().parse().map_err(|_| {
                PolarityError::parse(line_no, format!("score '{}' is not a number", score.trim()))
            })?;

            if lexicon.contains(word) {
                warn!(word, line = line_no, "Duplicate lexicon entry, keeping the later score");
            }
            if word.contains(char::is_whitespace) {
                phrases += 1;
            }
            lexicon.insert(word, score)?;
        }

        debug!(entries = lexicon.len(), phrases, "Parsed AFINN lexicon");
        Ok(lexicon)
    }

    /// Load an AFINN file from disk.
    pub fn from_afinn_file(path: &Path) -> PolarityResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PolarityError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse_afinn(&content)?;
        info!(path = %path.display(), entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }
}
