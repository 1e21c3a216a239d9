pub mod case;
pub mod title;

use crate::models::CaseStyle;
pub use title::TitleCaser;

/// Runs one case transform over the whole text.
pub fn apply(style: CaseStyle, text: &str, title: &TitleCaser<'_>) -> String {
    match style {
        CaseStyle::Upper => case::upper(text),
        CaseStyle::Lower => case::lower(text),
        CaseStyle::Sentence => case::sentence_case(text),
        CaseStyle::Capitalize => case::capitalize_each_word(text),
        CaseStyle::Inverse => case::inverse_case(text),
        CaseStyle::Title => title.apply(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexicalTables;

    #[test]
    fn every_style_is_total_on_empty_input() {
        let tables = LexicalTables::builtin().unwrap();
        let caser = TitleCaser::new(&tables);
        for style in CaseStyle::ALL {
            assert_eq!(apply(style, "", &caser), "", "{} on empty input", style);
        }
    }

    #[test]
    fn dispatches_to_the_named_transform() {
        let tables = LexicalTables::builtin().unwrap();
        let caser = TitleCaser::new(&tables);
        let text = "the api of things. it works";
        assert_eq!(apply(CaseStyle::Upper, text, &caser), "THE API OF THINGS. IT WORKS");
        assert_eq!(apply(CaseStyle::Sentence, text, &caser), "The api of things. It works");
        assert_eq!(apply(CaseStyle::Capitalize, text, &caser), "The Api Of Things. It Works");
        assert_eq!(apply(CaseStyle::Title, text, &caser), "API of Things It Works");
    }
}
