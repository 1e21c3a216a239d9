//! Character-level case mapping shared by every transform.
//!
//! Only one-to-one mappings that round-trip are applied. Characters such as
//! 'ß' (uppercases to "SS") or the Kelvin sign (lowercases to a plain 'k')
//! pass through untouched, which keeps upper/lower/inverse composable.

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        Some(_) => None,
        None => Some(first),
    }
}

pub fn upper_char(c: char) -> char {
    match single(c.to_uppercase()) {
        Some(u) if u != c && single(u.to_lowercase()) == Some(c) => u,
        _ => c,
    }
}

pub fn lower_char(c: char) -> char {
    match single(c.to_lowercase()) {
        Some(l) if l != c && single(l.to_uppercase()) == Some(c) => l,
        _ => c,
    }
}

/// swaps the case of a cased letter, anything else is returned as is
pub fn swap_char(c: char) -> char {
    let upper = upper_char(c);
    if upper != c {
        return upper;
    }
    lower_char(c)
}

pub fn to_upper(text: &str) -> String {
    text.chars().map(upper_char).collect()
}

pub fn to_lower(text: &str) -> String {
    text.chars().map(lower_char).collect()
}

/// first character upper, the rest lower
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(upper_char(first));
            out.extend(chars.map(lower_char));
            out
        }
        None => String::new(),
    }
}

/// true when the words of `phrase` appear in `text` as a contiguous run of
/// whole whitespace-delimited words
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() {
        return false;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(needle.len()).any(|window| window == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_map_both_ways() {
        assert_eq!(upper_char('a'), 'A');
        assert_eq!(lower_char('Q'), 'q');
        assert_eq!(swap_char('x'), 'X');
        assert_eq!(swap_char('7'), '7');
    }

    #[test]
    fn expanding_and_lossy_mappings_pass_through() {
        assert_eq!(upper_char('ß'), 'ß');
        assert_eq!(lower_char('\u{212A}'), '\u{212A}');
        assert_eq!(to_upper("straße"), "STRAßE");
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn contains_phrase_needs_whole_words() {
        assert!(contains_phrase("alpha beta", "beta"));
        assert!(!contains_phrase("alphabet", "alpha"));
        assert!(!contains_phrase("", "alpha"));
        assert!(!contains_phrase("alpha", "  "));
    }

    #[test]
    fn contains_phrase_matches_contiguous_runs() {
        assert!(contains_phrase("hello two words", "two words"));
        assert!(contains_phrase("hello two\twords here", "two  words"));
        assert!(!contains_phrase("two hello words", "two words"));
        assert!(!contains_phrase("two", "two words"));
        assert!(!contains_phrase("hello twowords", "two words"));
    }
}
