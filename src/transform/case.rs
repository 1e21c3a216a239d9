use crate::utils::strings;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// start of text or a sentence terminator, anything but letters, then the first letter
static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:^|[.!?])[^\p{L}.!?]*)(\p{L})").expect("valid sentence regex")
});

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid word regex"));

pub fn upper(text: &str) -> String {
    strings::to_upper(text)
}

pub fn lower(text: &str) -> String {
    strings::to_lower(text)
}

pub fn sentence_case(text: &str) -> String {
    let lowered = strings::to_lower(text);
    SENTENCE_START
        .replace_all(&lowered, |caps: &Captures| {
            format!("{}{}", &caps[1], strings::to_upper(&caps[2]))
        })
        .into_owned()
}

pub fn capitalize_each_word(text: &str) -> String {
    WORD_START
        .replace_all(text, |caps: &Captures| strings::to_upper(&caps[0]))
        .into_owned()
}

pub fn inverse_case(text: &str) -> String {
    text.chars().map(strings::swap_char).collect()
}
