use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every buffer-wide case transform the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    Upper,
    Lower,
    Sentence,
    Capitalize,
    Inverse,
    Title,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Sentence,
        CaseStyle::Capitalize,
        CaseStyle::Inverse,
        CaseStyle::Title,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Capitalize => "capitalize",
            CaseStyle::Inverse => "inverse",
            CaseStyle::Title => "title",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown case style: {}", s))
    }
}

/// How aggressively title casing strips plural endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Singularization {
    /// only "-ies" becomes "-y"
    #[default]
    IesOnly,
    /// "-ies" -> "-y", then "-ses" -> "-s", then a bare trailing "s" on words longer than 3
    Aggressive,
}

/// Shape of the embedded lexicon resources.
#[derive(Debug, Deserialize, Clone)]
pub struct WordList {
    #[allow(dead_code)]
    pub name: String,
    pub words: Vec<String>,
}

/// The persisted half of the word bank, exactly as it is written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBank {
    #[serde(rename = "wordBank")]
    pub word_bank: Vec<String>,
    #[serde(rename = "bankActive")]
    pub bank_active: bool,
}

impl Default for PersistedBank {
    fn default() -> Self {
        Self {
            word_bank: Vec::new(),
            bank_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_style_parses_names_case_insensitively() {
        assert_eq!("Title".parse::<CaseStyle>(), Ok(CaseStyle::Title));
        assert_eq!(" inverse ".parse::<CaseStyle>(), Ok(CaseStyle::Inverse));
        assert!("snake".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn persisted_bank_uses_storage_key_names() {
        let bank = PersistedBank {
            word_bank: vec!["x".to_string()],
            bank_active: false,
        };
        let json = serde_json::to_string(&bank).unwrap();
        assert_eq!(json, r#"{"wordBank":["x"],"bankActive":false}"#);
    }
}
