use crate::error::{Result, SegmenterError};
use crate::indent::DEFAULT_TAB_WIDTH;
use serde::{Deserialize, Serialize};

/// Configuration for segmentation behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Tab stop width used when measuring indentation
    pub tab_width: usize,

    /// Keywords that open a reportable definition (`class`, `def`)
    pub definition_keywords: Vec<String>,

    /// Keywords allowed in front of a definition keyword (`async`)
    pub modifier_keywords: Vec<String>,

    /// How wrapped multi-line statements are recognised
    pub continuation: ContinuationMode,

    /// Report definitions whose body sits on the header line (`def f(): pass`)
    pub inline_definitions: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            definition_keywords: vec!["class".to_string(), "def".to_string()],
            modifier_keywords: vec!["async".to_string()],
            continuation: ContinuationMode::TrailingParen,
            inline_definitions: true,
        }
    }
}

impl SegmenterConfig {
    /// Track bracket and string nesting to find where wrapped statements end
    pub fn bracket_aware() -> Self {
        Self {
            continuation: ContinuationMode::BracketDepth,
            ..Default::default()
        }
    }

    /// Only indented blocks produce segments; single-line definitions are not reported
    pub fn legacy() -> Self {
        Self {
            continuation: ContinuationMode::TrailingParen,
            inline_definitions: false,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(SegmenterError::invalid_config("tab_width must be > 0"));
        }

        if self.definition_keywords.is_empty() {
            return Err(SegmenterError::invalid_config(
                "definition_keywords must not be empty",
            ));
        }

        for keyword in self
            .definition_keywords
            .iter()
            .chain(self.modifier_keywords.iter())
        {
            if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
                return Err(SegmenterError::invalid_config(format!(
                    "keyword {keyword:?} must be a single non-empty token"
                )));
            }
        }

        Ok(())
    }

    /// True when the stripped line opens with a definition keyword as a whole token,
    /// optionally preceded by modifier keywords.
    pub fn is_definition_header(&self, line: &str) -> bool {
        let mut rest = line.trim();
        loop {
            let (token, tail) = split_token(rest);
            if self.definition_keywords.iter().any(|kw| kw == token) {
                return true;
            }
            if tail.is_empty() || !self.modifier_keywords.iter().any(|kw| kw == token) {
                return false;
            }
            rest = tail;
        }
    }
}

/// Split off the leading whitespace-delimited token.
fn split_token(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim_start()),
        None => (text, ""),
    }
}

/// Strategy for recognising lines that continue an earlier statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationMode {
    /// A line starting with `)` and ending with `:` closes a wrapped header.
    /// Matches the common formatter layout for long signatures.
    #[default]
    TrailingParen,

    /// Track `()[]{}` depth, string literals and backslashes across lines.
    /// Independent of formatting style.
    BracketDepth,
}
