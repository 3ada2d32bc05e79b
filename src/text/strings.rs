// ============================================================================
// String Utilities
// Case, search, substring and joining helpers over a single string
// ============================================================================
//
// Positions and lengths count chars (Unicode scalar values), never bytes, so
// no helper can split a multi-byte character. Functions that only narrow
// their input return a borrowed slice; anything that builds new text returns
// a String.

use regex::Regex;
use std::fmt::Display;

const ELLIPSIS: &str = "...";

/// Byte offset of the `n`th char, or `s.len()` past the end.
#[inline]
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Clamp a possibly negative position into `[0, len]`.
#[inline]
fn clamp_position(pos: isize, len: usize) -> usize {
    if pos < 0 {
        0
    } else {
        (pos as usize).min(len)
    }
}

fn starts_with_impl(s: &str, prefix: &str, ignore_case: bool) -> bool {
    if s.is_empty() || prefix.is_empty() {
        return s.is_empty() && prefix.is_empty();
    }
    if ignore_case {
        s.to_lowercase().starts_with(&prefix.to_lowercase())
    } else {
        s.starts_with(prefix)
    }
}

fn ends_with_impl(s: &str, suffix: &str, ignore_case: bool) -> bool {
    if s.is_empty() || suffix.is_empty() {
        return s.is_empty() && suffix.is_empty();
    }
    if ignore_case {
        s.to_lowercase().ends_with(&suffix.to_lowercase())
    } else {
        s.ends_with(suffix)
    }
}

// ============================================================================
// Abbreviation
// ============================================================================

/// Abbreviate to at most `max_width` chars using "...".
///
/// `max_width` below 4 leaves the string unchanged.
pub fn abbreviate(s: &str, max_width: usize) -> String {
    abbreviate_with_offset(s, 0, max_width)
}

/// Abbreviate around `offset`, keeping the char at `offset` visible where
/// possible. Both ends may be elided, which needs `max_width >= 7`.
///
/// # Example
/// ```ignore
/// assert_eq!(abbreviate_with_offset("abcdefghijklmno", 5, 10), "...fghi...");
/// ```
pub fn abbreviate_with_offset(s: &str, offset: usize, max_width: usize) -> String {
    let size = s.chars().count();
    if s.is_empty() || max_width < 4 || size <= max_width {
        return s.to_string();
    }
    let keep = max_width - 3;
    let mut offset = offset.min(size);
    if size - offset < keep {
        offset = size - keep;
    }
    if offset <= 4 {
        return format!("{}{}", &s[..byte_offset(s, keep)], ELLIPSIS);
    }
    if max_width < 7 {
        return s.to_string();
    }
    if offset + keep < size {
        let rest = &s[byte_offset(s, offset)..];
        return format!("{}{}", ELLIPSIS, abbreviate(rest, keep));
    }
    format!("{}{}", ELLIPSIS, &s[byte_offset(s, size - keep)..])
}

// ============================================================================
// Prefix / Suffix
// ============================================================================

fn append_if_missing_impl(s: &str, suffix: &str, ignore_case: bool, suffixes: &[&str]) -> String {
    if s.is_empty() {
        return String::new();
    }
    let present = std::iter::once(suffix)
        .chain(suffixes.iter().copied())
        .any(|candidate| ends_with_impl(s, candidate, ignore_case));
    if present {
        s.to_string()
    } else {
        format!("{}{}", s, suffix)
    }
}

/// Append `suffix` unless `s` already ends with it or any of `suffixes`.
///
/// An empty `s` stays empty.
pub fn append_if_missing(s: &str, suffix: &str, suffixes: &[&str]) -> String {
    append_if_missing_impl(s, suffix, false, suffixes)
}

/// Case-insensitive [`append_if_missing`].
pub fn append_if_missing_ignore_case(s: &str, suffix: &str, suffixes: &[&str]) -> String {
    append_if_missing_impl(s, suffix, true, suffixes)
}

fn prepend_if_missing_impl(s: &str, prefix: &str, ignore_case: bool, prefixes: &[&str]) -> String {
    // An empty candidate prefix always counts as present
    let matches = |candidate: &str| {
        candidate.is_empty()
            || if ignore_case {
                s.to_lowercase().starts_with(&candidate.to_lowercase())
            } else {
                s.starts_with(candidate)
            }
    };
    if matches(prefix) || prefixes.iter().any(|p| matches(*p)) {
        s.to_string()
    } else {
        format!("{}{}", prefix, s)
    }
}

/// Prepend `prefix` unless `s` already starts with it or any of `prefixes`.
///
/// Unlike [`append_if_missing`], an empty `s` receives the prefix.
pub fn prepend_if_missing(s: &str, prefix: &str, prefixes: &[&str]) -> String {
    prepend_if_missing_impl(s, prefix, false, prefixes)
}

/// Case-insensitive [`prepend_if_missing`].
pub fn prepend_if_missing_ignore_case(s: &str, prefix: &str, prefixes: &[&str]) -> String {
    prepend_if_missing_impl(s, prefix, true, prefixes)
}

/// Both-empty counts as a match; otherwise an empty prefix never matches.
pub fn starts_with(s: &str, prefix: &str) -> bool {
    starts_with_impl(s, prefix, false)
}

pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    starts_with_impl(s, prefix, true)
}

pub fn starts_with_any(s: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| starts_with_impl(s, p, false))
}

pub fn starts_with_any_ignore_case(s: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| starts_with_impl(s, p, true))
}

/// Both-empty counts as a match; otherwise an empty suffix never matches.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    ends_with_impl(s, suffix, false)
}

pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    ends_with_impl(s, suffix, true)
}

pub fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|x| ends_with_impl(s, x, false))
}

pub fn ends_with_any_ignore_case(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|x| ends_with_impl(s, x, true))
}

// ============================================================================
// Case
// ============================================================================

/// Uppercase the first char; the rest is untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first char if it is uppercase; the rest is untouched.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// Lowercase becomes uppercase and vice versa; other chars are kept.
pub fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Line Endings
// ============================================================================

/// Remove one trailing "\r\n", "\n" or "\r".
pub fn chomp(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .or_else(|| s.strip_suffix('\r'))
        .unwrap_or(s)
}

/// Remove the last char, treating a trailing "\r\n" as one char.
pub fn chop(s: &str) -> &str {
    let chomped = chomp(s);
    if chomped.len() < s.len() {
        return chomped;
    }
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

// ============================================================================
// Search
// ============================================================================

pub fn contains_any(s: &str, search: &[&str]) -> bool {
    search.iter().any(|needle| s.contains(needle))
}

/// Whether `s` contains any char of `chars`.
pub fn contains_any_char(s: &str, chars: &str) -> bool {
    chars.chars().any(|c| s.contains(c))
}

pub fn contains_ignore_case(s: &str, search: &str) -> bool {
    s.to_lowercase().contains(&search.to_lowercase())
}

pub fn contains_none(s: &str, search: &[&str]) -> bool {
    !contains_any(s, search)
}

pub fn contains_none_char(s: &str, chars: &str) -> bool {
    !contains_any_char(s, chars)
}

/// Whether every char of `s` is in `valid`. True for an empty `s`.
pub fn contains_only(s: &str, valid: &[char]) -> bool {
    s.chars().all(|c| valid.contains(&c))
}

// ============================================================================
// Character Classes
// ============================================================================

#[inline]
fn non_empty_and_all(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

pub fn is_all_lower_case(s: &str) -> bool {
    non_empty_and_all(s, char::is_lowercase)
}

pub fn is_all_upper_case(s: &str) -> bool {
    non_empty_and_all(s, char::is_uppercase)
}

pub fn is_alpha(s: &str) -> bool {
    non_empty_and_all(s, char::is_alphabetic)
}

pub fn is_alphanumeric(s: &str) -> bool {
    non_empty_and_all(s, char::is_alphanumeric)
}

pub fn is_alpha_space(s: &str) -> bool {
    non_empty_and_all(s, |c| c.is_alphabetic() || c.is_whitespace())
}

pub fn is_alphanumeric_space(s: &str) -> bool {
    non_empty_and_all(s, |c| c.is_alphanumeric() || c.is_whitespace())
}

/// Digits only. True for an empty string.
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(char::is_numeric)
}

/// Digits and whitespace only. True for an empty string.
pub fn is_numeric_space(s: &str) -> bool {
    s.chars().all(|c| c.is_numeric() || c.is_whitespace())
}

/// Whitespace only. True for an empty string.
pub fn is_whitespace(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

// ============================================================================
// Emptiness
// ============================================================================

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_any_blank(values: &[&str]) -> bool {
    values.iter().any(|s| is_blank(s))
}

pub fn is_none_blank(values: &[&str]) -> bool {
    !is_any_blank(values)
}

pub fn is_any_empty(values: &[&str]) -> bool {
    values.iter().any(|s| s.is_empty())
}

pub fn is_none_empty(values: &[&str]) -> bool {
    !is_any_empty(values)
}

/// `s`, or `default` when `s` is empty.
pub fn default_string<'a>(s: &'a str, default: &'a str) -> &'a str {
    if s.is_empty() {
        default
    } else {
        s
    }
}

// ============================================================================
// Joining
// ============================================================================

/// Join any displayable values (bools, integers, ...) with `sep`.
pub fn join_display<T: Display>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Join floats using the shortest text that round-trips at f32 precision,
/// so `0.1 + 0.2` prints as `0.3`.
pub fn join_f64(values: &[f64], sep: &str) -> String {
    values
        .iter()
        .map(|v| (*v as f32).to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Join floats with a fixed number of decimals.
pub fn join_f64_with_precision(values: &[f64], decimals: usize, sep: &str) -> String {
    values
        .iter()
        .map(|v| format!("{:.*}", decimals, v))
        .collect::<Vec<_>>()
        .join(sep)
}

// ============================================================================
// Substrings
// ============================================================================

/// The leftmost `size` chars.
pub fn left(s: &str, size: usize) -> &str {
    &s[..byte_offset(s, size)]
}

/// The rightmost `size` chars.
pub fn right(s: &str, size: usize) -> &str {
    let count = s.chars().count();
    if size >= count {
        s
    } else {
        &s[byte_offset(s, count - size)..]
    }
}

/// `size` chars starting at `pos`. A negative `pos` starts at 0; a `pos`
/// past the end yields "".
pub fn mid(s: &str, pos: isize, size: usize) -> &str {
    let count = s.chars().count();
    let start = clamp_position(pos, count);
    let end = start.saturating_add(size).min(count);
    &s[byte_offset(s, start)..byte_offset(s, end)]
}

/// Replace chars `[start, end)` with `overlay`. Positions are clamped into
/// the string and swapped when reversed.
pub fn overlay(s: &str, overlay: &str, start: isize, end: isize) -> String {
    let count = s.chars().count();
    let mut start = clamp_position(start, count);
    let mut end = clamp_position(end, count);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let head = &s[..byte_offset(s, start)];
    let tail = &s[byte_offset(s, end)..];
    format!("{}{}{}", head, overlay, tail)
}

pub fn substring_after<'a>(s: &'a str, sep: &str) -> &'a str {
    match s.find(sep) {
        Some(i) => &s[i + sep.len()..],
        None => s,
    }
}

pub fn substring_after_last<'a>(s: &'a str, sep: &str) -> &'a str {
    match s.rfind(sep) {
        Some(i) => &s[i + sep.len()..],
        None => s,
    }
}

pub fn substring_before<'a>(s: &'a str, sep: &str) -> &'a str {
    match s.find(sep) {
        Some(i) => &s[..i],
        None => s,
    }
}

pub fn substring_before_last<'a>(s: &'a str, sep: &str) -> &'a str {
    match s.rfind(sep) {
        Some(i) => &s[..i],
        None => s,
    }
}

// ============================================================================
// Removal
// ============================================================================

/// Remove every occurrence of `sub`, rescanning after each removal, so
/// occurrences formed by a removal are removed too.
pub fn remove(s: &str, sub: &str) -> String {
    let mut out = s.to_string();
    if sub.is_empty() {
        return out;
    }
    while let Some(i) = out.find(sub) {
        out.replace_range(i..i + sub.len(), "");
    }
    out
}

pub fn remove_start<'a>(s: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return s;
    }
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Byte length of the shortest run of `chars` whose lowercase form is
/// `target`. Case mappings can change length (`İ` lowercases to two chars),
/// so the span is measured in the source rather than taken from the needle.
///
/// With `reversed`, `chars` walks back from the end and `target` is the
/// lowercased needle reversed.
fn lowercase_match_len(
    chars: impl Iterator<Item = char>,
    target: &[char],
    reversed: bool,
) -> Option<usize> {
    let mut lowered: Vec<char> = Vec::with_capacity(target.len());
    let mut consumed = 0;
    for c in chars {
        if reversed {
            lowered.extend(c.to_lowercase().rev());
        } else {
            lowered.extend(c.to_lowercase());
        }
        consumed += c.len_utf8();
        if lowered.len() >= target.len() {
            return (lowered == target).then_some(consumed);
        }
        if !target.starts_with(&lowered) {
            return None;
        }
    }
    None
}

pub fn remove_start_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    let target: Vec<char> = prefix.chars().flat_map(char::to_lowercase).collect();
    if target.is_empty() {
        return s;
    }
    match lowercase_match_len(s.chars(), &target, false) {
        Some(len) => &s[len..],
        None => s,
    }
}

pub fn remove_end<'a>(s: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return s;
    }
    s.strip_suffix(suffix).unwrap_or(s)
}

pub fn remove_end_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    let target: Vec<char> = suffix
        .chars()
        .rev()
        .flat_map(|c| c.to_lowercase().rev())
        .collect();
    if target.is_empty() {
        return s;
    }
    match lowercase_match_len(s.chars().rev(), &target, true) {
        Some(len) => &s[..s.len() - len],
        None => s,
    }
}

/// Remove every match of the regular expression `pattern`.
///
/// # Errors
/// Returns the compile error when `pattern` is not a valid expression.
pub fn remove_pattern(s: &str, pattern: &str) -> Result<String, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(s, "").into_owned())
}

// ============================================================================
// Whitespace
// ============================================================================

pub fn strip(s: &str) -> &str {
    s.trim()
}

pub fn strip_start(s: &str) -> &str {
    s.trim_start()
}

pub fn strip_end(s: &str) -> &str {
    s.trim_end()
}

/// Trim ASCII spaces only; tabs and newlines are kept.
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

// ============================================================================
// Assembly
// ============================================================================

pub fn repeat_with_separator(s: &str, sep: &str, times: usize) -> String {
    vec![s; times].join(sep)
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverse the order of `delimiter`-separated segments.
pub fn reverse_delimited(s: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return reverse(s);
    }
    s.rsplit(delimiter).collect::<Vec<_>>().join(delimiter)
}

/// Surround a non-empty `s` with `with` on both sides.
pub fn wrap(s: &str, with: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", with, s, with)
    }
}
