use unicode_general_category::{GeneralCategory, get_general_category};

/// Text normalizer for scoring: splits camelCase words into lowercase
/// components and leaves every other word untouched.
pub struct Normalizer;

impl Normalizer {
    /// Normalize free text into whitespace-separated tokens.
    ///
    /// Each whitespace-delimited word that passes [`Normalizer::is_camel_case`]
    /// is split and lowercased; other words are passed through verbatim.
    /// The result is joined with single spaces, so normalizing twice is the
    /// same as normalizing once.
    pub fn normalize(text: &str) -> String {
        words(text)
            .map(|word| {
                if Self::is_camel_case(word) {
                    split_camel_case(word)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A word is camelCase if it has mixed case and no underscore.
    ///
    /// Examples:
    ///   "fixBug" -> true
    ///   "Fix" -> true
    ///   "fixbug", "FIXBUG", "FIX_BUG", "fix_Bug" -> false
    pub fn is_camel_case(word: &str) -> bool {
        word != word.to_lowercase() && word != word.to_uppercase() && !word.contains('_')
    }
}

/// Split a camelCase word on case boundaries and lowercase it.
///
/// A space goes before an ASCII uppercase letter that either follows an ASCII
/// lowercase letter, or is not the first character and precedes an ASCII
/// lowercase letter. Both tests look at the original word.
///
/// Examples:
///   "fixBugInParser" -> "fix bug in parser"
///   "XMLHttpRequest" -> "xml http request"
///   "fixBUG" -> "fix bug"
///   "ABc" -> "a bc"
pub fn split_camel_case(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let after_lower = chars[i - 1].is_ascii_lowercase();
            let before_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if after_lower || before_lower {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out.to_lowercase()
}

/// Word separators: Unicode whitespace plus the ASCII file, group, record
/// and unit separators (U+001C..=U+001F).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|w| !w.is_empty())
}

/// Whitespace-delimited tokens, as used by the BLEU and ROUGE-L metrics.
pub fn word_tokens(text: &str) -> Vec<&str> {
    words(text).collect()
}

/// Letters, numbers and `_`. Combining marks are not word characters.
fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;
    c == '_'
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | DecimalNumber
                | LetterNumber
                | OtherNumber
        )
}

/// Bag-of-words terms for the vector metric.
///
/// The text is lowercased first; a term is then a run of two or more word
/// characters. Single characters, punctuation and combining marks separate
/// terms and are dropped.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut out = Vec::new();
    let mut start = None;

    for (i, c) in lower.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                push_term(&mut out, &lower[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_term(&mut out, &lower[s..]);
    }

    out
}

fn push_term(out: &mut Vec<String>, run: &str) {
    if run.chars().nth(1).is_some() {
        out.push(run.to_string());
    }
}
