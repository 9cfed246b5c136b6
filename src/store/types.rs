//! Core pattern types
//!
//! This module defines the data structure that represents a saved pattern file.

use serde::{Deserialize, Serialize};

/// A saved pattern definition
///
/// The pattern's name is not part of the definition; it is derived from the
/// filename the definition is stored under, so renaming the file renames the
/// pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pattern {
    /// Engine flags, passed through verbatim after whitespace splitting
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flags: String,

    /// A single regular expression
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    /// Alternative regular expressions, combined into one alternation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    /// External search program to invoke instead of the default
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub engine: String,
}

impl Pattern {
    /// Create a definition holding only flags and a single pattern
    pub fn new(flags: impl Into<String>, pattern: impl Into<String>) -> Self {
        Pattern {
            flags: flags.into(),
            pattern: pattern.into(),
            ..Pattern::default()
        }
    }

    /// Resolve the definition into one concrete search expression
    ///
    /// Uses `pattern` when set; otherwise synthesizes an alternation from
    /// `patterns`, preserving their order. Returns `None` when the definition
    /// holds neither.
    pub fn effective_pattern(&self) -> Option<String> {
        if !self.pattern.is_empty() {
            return Some(self.pattern.clone());
        }

        if self.patterns.is_empty() {
            return None;
        }

        Some(format!("({})", self.patterns.join("|")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_pattern_single() {
        let def = Pattern::new("-i", "foo");
        assert_eq!(def.effective_pattern(), Some("foo".to_string()));
    }

    #[test]
    fn test_effective_pattern_alternation() {
        let def = Pattern {
            patterns: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Pattern::default()
        };
        assert_eq!(def.effective_pattern(), Some("(a|b|c)".to_string()));
    }

    #[test]
    fn test_effective_pattern_prefers_single() {
        let def = Pattern {
            pattern: "foo".to_string(),
            patterns: vec!["a".to_string(), "b".to_string()],
            ..Pattern::default()
        };
        assert_eq!(def.effective_pattern(), Some("foo".to_string()));
    }

    #[test]
    fn test_effective_pattern_empty() {
        let def = Pattern::default();
        assert_eq!(def.effective_pattern(), None);
    }

    #[test]
    fn test_deserialize_omits_missing_fields() {
        let def: Pattern = serde_json::from_str(r#"{"pattern": "foo"}"#).unwrap();
        assert_eq!(def.pattern, "foo");
        assert!(def.flags.is_empty());
        assert!(def.patterns.is_empty());
        assert!(def.engine.is_empty());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let def = Pattern::new("-Hnri", "foo");
        let json = serde_json::to_string(&def).unwrap();
        assert!(!json.contains("patterns"));
        assert!(!json.contains("engine"));
    }
}
