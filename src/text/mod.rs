// ============================================================================
// Text Module
// String and word helpers
// ============================================================================
//
// - strings: whole-string helpers (case, search, substrings, joining)
// - words: per-word helpers (capitalization, initials, whole-word search)
//
// Both modules share function names such as `capitalize` and `swap_case`, so
// they are reached through their module path rather than re-exported flat.

pub mod strings;
pub mod words;
