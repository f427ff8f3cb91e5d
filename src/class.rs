//! Class declaration detection and name extraction.

use crate::patterns::{matches, Rule};

const CLASS_KEYWORD: &str = "class ";

/// Whether `line` looks like a single-line class header.
///
/// Requires `class`, whitespace, a run of ASCII letters and an opening brace
/// somewhere after it. Headers whose `{` sits on the following line are not
/// detected.
///
/// # Examples
///
/// ```
/// use linecode::is_class_declaration;
///
/// assert!(is_class_declaration("export class Handler extends Base {"));
/// assert!(!is_class_declaration("class Handler extends Base"));
/// ```
pub fn is_class_declaration(line: &str) -> bool {
    matches(Rule::ClassDeclaration, line)
}

/// Extract the class name from a line containing `class `.
///
/// Takes the first whitespace-delimited token after the first `class `,
/// with any trailing `{` removed. Returns an empty string if the line has no
/// `class ` at all. The line is not checked with [`is_class_declaration`]
/// first, so unrelated lines give best-effort results.
///
/// Only a literal `class ` (single space) is split on, so some lines that
/// [`is_class_declaration`] accepts still give an empty name: `class\tFoo {`,
/// or `a class { class Foo {` where the first `class ` is followed by `{`.
pub fn extract_class_name(line: &str) -> String {
    let Some((_, rest)) = line.split_once(CLASS_KEYWORD) else {
        return String::new();
    };

    rest.split_whitespace()
        .next()
        .map(|token| token.trim_end_matches('{').to_string())
        .unwrap_or_default()
}
