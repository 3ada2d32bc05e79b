// ============================================================================
// Word Utilities
// Per-word case transforms, initials and whole-word search
// ============================================================================
//
// A word is a maximal run of chars between delimiters. Every function takes
// `delimiters: Option<&[char]>`:
// - None: any whitespace char delimits
// - Some(&[]): nothing delimits and the input is returned unchanged
// - Some(chars): exactly those chars delimit

#[inline]
fn is_delimiter(c: char, delimiters: Option<&[char]>) -> bool {
    match delimiters {
        None => c.is_whitespace(),
        Some(set) => set.contains(&c),
    }
}

#[inline]
fn no_delimiters(delimiters: Option<&[char]>) -> bool {
    matches!(delimiters, Some(set) if set.is_empty())
}

/// Rewrite the first char of every word with `first`, keeping the rest.
fn map_word_starts<I>(s: &str, delimiters: Option<&[char]>, first: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    if s.is_empty() || no_delimiters(delimiters) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if is_delimiter(c, delimiters) {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(first(c));
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Capitalization
// ============================================================================

/// Uppercase the first char of every whitespace-separated word.
///
/// # Example
/// ```ignore
/// assert_eq!(words::capitalize("i am FINE"), "I Am FINE");
/// ```
pub fn capitalize(s: &str) -> String {
    capitalize_delimited(s, None)
}

pub fn capitalize_delimited(s: &str, delimiters: Option<&[char]>) -> String {
    map_word_starts(s, delimiters, char::to_uppercase)
}

/// Lowercase the first char of every whitespace-separated word.
pub fn uncapitalize(s: &str) -> String {
    uncapitalize_delimited(s, None)
}

pub fn uncapitalize_delimited(s: &str, delimiters: Option<&[char]>) -> String {
    map_word_starts(s, delimiters, char::to_lowercase)
}

// ============================================================================
// Initials
// ============================================================================

/// First char of every whitespace-separated word.
pub fn initials(s: &str) -> String {
    initials_delimited(s, None)
}

pub fn initials_delimited(s: &str, delimiters: Option<&[char]>) -> String {
    if s.is_empty() || no_delimiters(delimiters) {
        return s.to_string();
    }
    let mut out = String::new();
    let mut at_word_start = true;
    for c in s.chars() {
        if is_delimiter(c, delimiters) {
            at_word_start = true;
        } else if at_word_start {
            out.push(c);
            at_word_start = false;
        }
    }
    out
}

// ============================================================================
// Case Swapping
// ============================================================================

/// Latin digraphs with a distinct titlecase form: (upper, title, lower).
const DIGRAPHS: [(char, char, char); 4] = [
    ('\u{01C4}', '\u{01C5}', '\u{01C6}'),
    ('\u{01C7}', '\u{01C8}', '\u{01C9}'),
    ('\u{01CA}', '\u{01CB}', '\u{01CC}'),
    ('\u{01F1}', '\u{01F2}', '\u{01F3}'),
];

#[inline]
fn is_titlecase(c: char) -> bool {
    DIGRAPHS.iter().any(|&(_, title, _)| title == c)
}

fn push_titlecase(out: &mut String, c: char) {
    match DIGRAPHS.iter().find(|&&(_, _, lower)| lower == c) {
        Some(&(_, title, _)) => out.push(title),
        None => out.extend(c.to_uppercase()),
    }
}

/// Swap the case of every char. A lowercase char that starts a
/// whitespace-separated word goes to titlecase rather than uppercase, which
/// only differs for digraphs such as `ǆ` (`ǅ` vs `Ǆ`).
pub fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_whitespace = true;
    for c in s.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            out.extend(c.to_lowercase());
            after_whitespace = false;
        } else if c.is_lowercase() {
            if after_whitespace {
                push_titlecase(&mut out, c);
                after_whitespace = false;
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
            after_whitespace = c.is_whitespace();
        }
    }
    out
}

// ============================================================================
// Search
// ============================================================================

/// Word chars for boundary matching.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `word` occurs in `s` with a word boundary on both sides.
fn contains_word(s: &str, word: &str) -> bool {
    let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back()) else {
        return false;
    };
    let mut from = 0;
    while let Some(found) = s[from..].find(word) {
        let start = from + found;
        let end = start + word.len();
        let before = s[..start].chars().next_back();
        let after = s[end..].chars().next();
        let left_boundary = before.map_or(false, is_word_char) != is_word_char(first);
        let right_boundary = after.map_or(false, is_word_char) != is_word_char(last);
        if left_boundary && right_boundary {
            return true;
        }
        // Resume one char later so overlapping candidates are still seen
        from = start + first.len_utf8();
    }
    false
}

/// Whether every entry of `words` appears in `s` as a whole word.
///
/// Empty `s`, empty `words`, or any empty word yields false.
pub fn contains_all_words(s: &str, words: &[&str]) -> bool {
    if s.is_empty() || words.is_empty() {
        return false;
    }
    words.iter().all(|w| contains_word(s, w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("i am FINE"), "I Am FINE");
        assert_eq!(capitalize("  leading  gaps"), "  Leading  Gaps");
    }

    #[test]
    fn test_capitalize_delimited() {
        assert_eq!(capitalize_delimited("", Some(&[])), "");
        assert_eq!(capitalize_delimited("i am fine", Some(&[])), "i am fine");
        assert_eq!(capitalize_delimited("i am fine", Some(&[' '])), "I Am Fine");
        assert_eq!(capitalize_delimited("i aM.fine", Some(&['.'])), "I aM.Fine");
        assert_eq!(capitalize_delimited("a-b_c", Some(&['-', '_'])), "A-B_C");
    }

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize(""), "");
        assert_eq!(uncapitalize("I Am FINE"), "i am fINE");
        assert_eq!(uncapitalize_delimited("I Am.FINE", Some(&['.'])), "i Am.fINE");
        assert_eq!(uncapitalize_delimited("I Am", Some(&[])), "I Am");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("Ben John Lee"), "BJL");
        assert_eq!(initials("   Ben \n John\tLee  "), "BJL");
        assert_eq!(initials_delimited("Ben J.Lee", Some(&['.'])), "BL");
        assert_eq!(initials_delimited("Ben J.Lee", Some(&[' ', '.'])), "BJL");
        assert_eq!(initials_delimited("Ben", Some(&[])), "Ben");
    }

    #[test]
    fn test_initials_many_words() {
        let many = (0..40).map(|_| "x").collect::<Vec<_>>().join(" ");
        assert_eq!(initials(&many).len(), 40);
    }

    #[test]
    fn test_swap_case() {
        assert_eq!(swap_case(""), "");
        assert_eq!(swap_case("The dog has a BONE"), "tHE DOG HAS A bone");
        assert_eq!(swap_case("x1 y"), "X1 Y");
        assert_eq!(swap_case("\u{01C6}a \u{01C6}\u{01C6}"), "\u{01C5}A \u{01C5}\u{01C4}");
        assert_eq!(swap_case("\u{01C5}"), "\u{01C6}");
    }

    #[test]
    fn test_contains_all_words() {
        assert!(!contains_all_words("", &["a"]));
        assert!(!contains_all_words("abc", &[]));
        assert!(!contains_all_words("abc", &[""]));
        assert!(!contains_all_words("abcdf", &["ab", "cd"]));
        assert!(contains_all_words("abc def", &["def", "abc"]));
        assert!(contains_all_words("ab, cd!", &["ab", "cd"]));
        assert!(!contains_all_words("ab_cd", &["ab"]));
        // A later occurrence can satisfy the boundary when an earlier one does not
        assert!(contains_all_words("abcx abc", &["abc"]));
    }
}
