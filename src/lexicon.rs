use crate::config::LexiconConfig;
use crate::models::WordList;
use crate::utils::strings;
use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::collections::{HashMap, HashSet};

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

/// Immutable lookup data consulted by title casing.
///
/// Built once per session and shared by reference. Every lookup is
/// case-insensitive on its input.
#[derive(Debug, Clone, Default)]
pub struct LexicalTables {
    // uppercased key -> canonical display form
    acronyms: HashMap<String, String>,
    stopwords: HashSet<String>,
    uncountables: HashSet<String>,
    connectors: HashSet<String>,
}

impl LexicalTables {
    pub fn new<A, S, U, C>(acronyms: A, stopwords: S, uncountables: U, connectors: C) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut tables = Self::default();
        tables.extend_acronyms(acronyms);
        extend_set(&mut tables.stopwords, stopwords);
        extend_set(&mut tables.uncountables, uncountables);
        extend_set(&mut tables.connectors, connectors);
        tables
    }

    /// The tables bundled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            load_list("acronyms")?,
            load_list("stopwords")?,
            load_list("uncountables")?,
            load_list("connectors")?,
        ))
    }

    /// Bundled tables plus whatever the user configured on top.
    pub fn from_config(extra: &LexiconConfig) -> Result<Self> {
        let mut tables = Self::builtin()?;
        tables.extend_acronyms(&extra.extra_acronyms);
        extend_set(&mut tables.stopwords, &extra.extra_stopwords);
        extend_set(&mut tables.uncountables, &extra.extra_uncountables);
        extend_set(&mut tables.connectors, &extra.extra_connectors);
        log::debug!(
            "lexicon ready: {} acronyms, {} stopwords, {} uncountables, {} connectors",
            tables.acronyms.len(),
            tables.stopwords.len(),
            tables.uncountables.len(),
            tables.connectors.len()
        );
        Ok(tables)
    }

    fn extend_acronyms<A>(&mut self, acronyms: A)
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        for canonical in acronyms {
            let canonical = canonical.as_ref().trim();
            if canonical.is_empty() {
                continue;
            }
            self.acronyms
                .insert(strings::to_upper(canonical), canonical.to_string());
        }
    }

    pub fn acronym(&self, token: &str) -> Option<&str> {
        self.acronyms
            .get(&strings::to_upper(token))
            .map(String::as_str)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&strings::to_lower(token))
    }

    pub fn is_uncountable(&self, token: &str) -> bool {
        self.uncountables.contains(&strings::to_lower(token))
    }

    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.contains(&strings::to_lower(token))
    }
}

fn extend_set<I>(set: &mut HashSet<String>, words: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    set.extend(
        words
            .into_iter()
            .map(|w| strings::to_lower(w.as_ref().trim()))
            .filter(|w| !w.is_empty()),
    );
}

fn load_list(name: &str) -> Result<Vec<String>> {
    let filename = format!("lexicon/{}.json", name);
    let file = Asset::get(&filename).context(format!(
        "Could not find embedded lexicon file: {}",
        filename
    ))?;
    let raw = std::str::from_utf8(file.data.as_ref())?;
    let list: WordList = serde_json::from_str(raw)
        .with_context(|| format!("Malformed lexicon file: {}", filename))?;
    Ok(list.words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_load() {
        let tables = LexicalTables::builtin().unwrap();
        assert_eq!(tables.acronym("iot"), Some("IoT"));
        assert_eq!(tables.acronym("Api"), Some("API"));
        assert!(tables.is_stopword("The"));
        assert!(tables.is_stopword("in"));
        assert!(!tables.is_stopword("and"));
        assert!(tables.is_connector("AND"));
        assert!(tables.is_uncountable("Physics"));
        assert_eq!(tables.acronym("quick"), None);
    }

    #[test]
    fn config_extends_builtin_tables() {
        let extra = LexiconConfig {
            extra_acronyms: vec!["GraphQL".to_string()],
            extra_stopwords: vec!["Of".to_string()],
            extra_uncountables: vec!["kudos".to_string()],
            extra_connectors: vec![" via ".to_string(), "  ".to_string()],
        };
        let tables = LexicalTables::from_config(&extra).unwrap();
        assert_eq!(tables.acronym("graphql"), Some("GraphQL"));
        assert!(tables.is_stopword("of"));
        assert!(tables.is_uncountable("KUDOS"));
        assert!(tables.is_connector("via"));
        assert!(!tables.is_connector(""));
        // builtins are still there
        assert_eq!(tables.acronym("ai"), Some("AI"));
    }
}
