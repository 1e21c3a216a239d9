use crate::lexicon::LexicalTables;
use crate::models::Singularization;
use crate::utils::strings;
use regex::Regex;
use std::sync::LazyLock;

static AMPERSAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*&\s*").expect("valid ampersand regex"));

// everything except word characters, whitespace, hyphens and the isolated ampersands
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s&-]").expect("valid strip regex"));

static HYPHEN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("valid hyphen regex"));

const AMPERSAND_TOKEN: &str = "&";
const CONJUNCTION: &str = "and";

/// Headline-style title casing driven by the lexical tables.
///
/// Stopwords are dropped, hyphenated words are cased part by part, known
/// acronyms keep their canonical spelling, plural endings are trimmed per
/// the configured [`Singularization`], and connectors stay lowercase unless
/// they sit in the first surviving word.
#[derive(Debug, Clone, Copy)]
pub struct TitleCaser<'a> {
    tables: &'a LexicalTables,
    singularize: Singularization,
}

impl<'a> TitleCaser<'a> {
    pub fn new(tables: &'a LexicalTables) -> Self {
        Self {
            tables,
            singularize: Singularization::default(),
        }
    }

    pub fn with_singularization(mut self, rule: Singularization) -> Self {
        self.singularize = rule;
        self
    }

    pub fn apply(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        // an ampersand becomes a standalone token so it can be elided later
        let spaced = AMPERSAND.replace_all(trimmed, " & ");
        let cleaned = DISALLOWED.replace_all(&spaced, "");
        let joined = HYPHEN_GAP.replace_all(&cleaned, "-");

        let mut words: Vec<String> = Vec::new();
        for token in joined.split_whitespace() {
            if self.tables.is_stopword(token) {
                continue;
            }
            let first = words.is_empty();
            if token == AMPERSAND_TOKEN && !first {
                continue;
            }
            let cased: Vec<String> = token
                .split('-')
                .map(|part| self.case_part(part, first))
                .collect();
            words.push(cased.join("-"));
        }

        words.join(" ")
    }

    fn case_part(&self, part: &str, in_first_word: bool) -> String {
        let part = if part == AMPERSAND_TOKEN { CONJUNCTION } else { part };
        if part.is_empty() {
            return String::new();
        }

        if let Some(acronym) = self.tables.acronym(part) {
            return acronym.to_string();
        }

        if self.tables.is_uncountable(part) {
            return strings::capitalize(part);
        }

        let singular = singularize(&strings::to_lower(part), self.singularize);
        if !in_first_word && self.tables.is_connector(&singular) {
            return singular;
        }

        strings::capitalize(&singular)
    }
}

/// Strips a plural ending from an already lowercased word.
fn singularize(lower: &str, rule: Singularization) -> String {
    let long_enough = lower.chars().count() > 3;

    if long_enough && lower.ends_with("ies") {
        return format!("{}y", &lower[..lower.len() - 3]);
    }

    if rule == Singularization::Aggressive {
        if lower.ends_with("ses") {
            return lower[..lower.len() - 2].to_string();
        }
        if long_enough && lower.ends_with('s') {
            return lower[..lower.len() - 1].to_string();
        }
    }

    lower.to_string()
}
