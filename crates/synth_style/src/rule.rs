//! Style rules
//!
//! A rule associates a pattern with a style payload. Rules either match the
//! widget's name or the lower-case name of the region being styled.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, StyleError};
use crate::style::SynthStyle;

/// What a rule's pattern is tested against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The widget's name, `""` when unset
    Name,
    /// The lower-case region name, e.g. `"scrollbarthumb"`
    Region,
}

/// A compiled `(pattern, style, kind)` association
#[derive(Clone)]
pub struct StyleRule {
    source: Box<str>,
    regex: Regex,
    style: Arc<SynthStyle>,
    kind: MatchKind,
}

impl StyleRule {
    /// Compile a rule
    ///
    /// `None` matches everything. Region patterns are lower-cased first. The
    /// pattern must match the whole candidate, not a substring of it.
    pub fn new(pattern: Option<&str>, style: Arc<SynthStyle>, kind: MatchKind) -> Result<Self> {
        let source: Box<str> = match (pattern, kind) {
            (None, _) => ".*".into(),
            (Some(p), MatchKind::Region) => p.to_lowercase().into(),
            (Some(p), MatchKind::Name) => p.into(),
        };

        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|source_err| {
            StyleError::MalformedPattern {
                pattern: pattern.unwrap_or_default().to_string(),
                source: source_err,
            }
        })?;

        Ok(Self {
            source,
            regex,
            style,
            kind,
        })
    }

    pub fn by_name(pattern: &str, style: Arc<SynthStyle>) -> Result<Self> {
        Self::new(Some(pattern), style, MatchKind::Name)
    }

    pub fn by_region(pattern: &str, style: Arc<SynthStyle>) -> Result<Self> {
        Self::new(Some(pattern), style, MatchKind::Region)
    }

    /// Test the rule against the candidate its kind selects
    pub fn matches(&self, name_key: &str, region_key: &str) -> bool {
        let candidate = match self.kind {
            MatchKind::Name => name_key,
            MatchKind::Region => region_key,
        };
        self.regex.is_match(candidate)
    }

    /// Pattern as compiled (lower-cased for region rules)
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn style(&self) -> &Arc<SynthStyle> {
        &self.style
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }
}

impl PartialEq for StyleRule {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.source == other.source
            && Arc::ptr_eq(&self.style, &other.style)
    }
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRule")
            .field("pattern", &self.source)
            .field("kind", &self.kind)
            .field("style", &Arc::as_ptr(&self.style))
            .finish()
    }
}
