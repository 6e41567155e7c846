//! Placeholder-aware splitting of coordinate text.
//!
//! Coordinates are split on top-level `:` separators. Inside a `${...}`
//! placeholder neither `:` nor `}` of a nested placeholder ends anything, so
//! `g:a:${prop:default}` stays three fields. The scan is a single left-to-right
//! pass with one depth counter and one character of lookahead.

use crate::constants::COORDINATE_SEPARATOR;

/// Split `text` into fields on top-level `:` separators.
///
/// - `${` opens a placeholder and increments the nesting depth.
/// - `}` closes one level when inside a placeholder. An unmatched `}` at
///   depth 0 is kept as text and otherwise ignored.
/// - `:` at depth 0 ends the current field.
///
/// The final field is only emitted when it is non-empty, so a trailing
/// separator does not produce an empty trailing field (`"g:a:"` yields two
/// fields). Empty interior fields are kept. The tokenizer never fails; callers
/// decide whether the field count is acceptable.
///
/// # Examples
///
/// ```rust
/// use tiles_cli::coordinate::tokenize;
///
/// assert_eq!(tokenize("g:a:1.0"), vec!["g", "a", "1.0"]);
/// assert_eq!(tokenize("g:a:${prop:default}"), vec!["g", "a", "${prop:default}"]);
/// assert_eq!(tokenize("g:a:"), vec!["g", "a"]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                current.push_str("${");
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            COORDINATE_SEPARATOR if depth == 0 => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}
