use crate::word_bank::WordBank;
use textwrap::Options;

pub const FALLBACK_WIDTH: usize = 80;

/// Terminal width, or 80 when stdout is not a terminal.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH)
        .max(20)
}

/// Renders the bank as a short header followed by its words wrapped to `width`.
pub fn format_bank(bank: &WordBank, width: usize) -> String {
    let state = if bank.is_active() { "on" } else { "off" };
    let mut out = format!("word bank ({} words, capture {})\n", bank.len(), state);

    if bank.is_empty() {
        out.push_str("  (empty)\n");
        return out;
    }

    let words: Vec<&str> = bank.iter().collect();
    let line = words.join("  ");
    let options = Options::new(width.max(4))
        .initial_indent("  ")
        .subsequent_indent("  ");
    for wrapped in textwrap::wrap(&line, options) {
        out.push_str(&wrapped);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bank_says_so() {
        let bank = WordBank::default();
        assert_eq!(format_bank(&bank, 80), "word bank (0 words, capture on)\n  (empty)\n");
    }

    #[test]
    fn words_wrap_to_width() {
        let mut bank = WordBank::default();
        for word in ["alpha", "beta", "gamma", "delta"] {
            bank.add(word);
        }
        bank.set_active(false);

        let out = format_bank(&bank, 16);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "word bank (4 words, capture off)");
        assert!(lines.len() > 2);
        assert!(lines[1..].iter().all(|l| l.len() <= 16 && l.starts_with("  ")));
        for word in ["alpha", "beta", "gamma", "delta"] {
            assert!(out.contains(word));
        }
    }
}
