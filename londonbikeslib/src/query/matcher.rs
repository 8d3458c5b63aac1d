//! Case-insensitive name matching.

use regex::{Regex, RegexBuilder};

use crate::error::LondonBikesError;
use crate::Result;

/// Tests station names against a search term.
///
/// The term is a regular expression searched anywhere in the name, ignoring
/// case, so a plain word behaves as a substring test (`KING` matches
/// `King's Cross`) and the empty term matches every name.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    term: String,
    pattern: Regex,
}

impl NameMatcher {
    /// Compile a search term.
    ///
    /// Fails with [`LondonBikesError::InvalidPattern`] when the term is not
    /// valid pattern syntax (for example an unbalanced `(`).
    pub fn new(term: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(|e| LondonBikesError::InvalidPattern {
                pattern: term.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            term: term.to_string(),
            pattern,
        })
    }

    /// The term as given.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}
