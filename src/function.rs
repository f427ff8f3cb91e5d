//! Function header and control statement detection, plus function name
//! recovery.
//!
//! Names are recovered by a fixed sequence of [`NameRule`]s; the first rule
//! that applies decides the result.

use crate::patterns::{matches, table, Rule};

const FUNCTION_KEYWORD: &str = "function ";

/// Whether `line` is a bare named header such as `greet(name: string): void {`.
///
/// This is the permissive header rule on its own; it also accepts
/// `if(x) {` and does not apply the anonymous-function exclusion.
pub fn is_named_function_header(line: &str) -> bool {
    matches(Rule::NamedHeader, line)
}

/// Whether `line` is an anonymous `function (...) {` header.
pub fn is_anonymous_function_declaration(line: &str) -> bool {
    matches(Rule::AnonymousFunction, line)
}

/// Whether `line` binds a function to a name, e.g. `const f = (x) => {`.
pub fn is_named_function_expression(line: &str) -> bool {
    matches(Rule::NamedExpression, line)
}

/// Whether `line` declares a named function.
///
/// True when the named header rule matches and the anonymous function rule
/// does not, or when the named expression rule matches.
///
/// # Examples
///
/// ```
/// use linecode::is_named_function_declaration;
///
/// assert!(is_named_function_declaration("function doThing(x) {"));
/// assert!(is_named_function_declaration("const handler = (x) => {"));
/// assert!(is_named_function_declaration("greet(name: string): void {"));
/// assert!(!is_named_function_declaration("function (x) {"));
/// ```
pub fn is_named_function_declaration(line: &str) -> bool {
    (is_named_function_header(line) && !is_anonymous_function_declaration(line))
        || is_named_function_expression(line)
}

/// Whether `line` opens an `if`, `switch`, `while` or `for` block.
///
/// Independent of [`is_named_function_declaration`]; a line may satisfy both
/// and the caller decides which wins.
pub fn is_built_in_control_statement(line: &str) -> bool {
    matches(Rule::ControlStatement, line)
}

/// A strategy for recovering a function name from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRule {
    /// `function name(...) {`: text between `function ` and `(`.
    FunctionKeyword,
    /// `const name = (...) => {`: binding left of `=`, before the params.
    Assignment,
    /// `name(...) {`: everything before the params.
    BareCall,
}

/// A recovered function name and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The rule that produced `name`.
    pub rule: NameRule,
    /// May be empty when the rule applied but found nothing usable.
    pub name: String,
}

impl NameRule {
    /// Evaluation order used by [`extract_function_name`].
    pub const ORDER: [NameRule; 3] = [
        NameRule::FunctionKeyword,
        NameRule::Assignment,
        NameRule::BareCall,
    ];

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameRule::FunctionKeyword => "function_keyword",
            NameRule::Assignment => "assignment",
            NameRule::BareCall => "bare_call",
        }
    }

    /// Apply this rule alone. `None` means the rule does not apply to `line`.
    pub fn apply(&self, line: &str) -> Option<NameMatch> {
        let name = match self {
            NameRule::FunctionKeyword => keyword_name(line)?,
            NameRule::Assignment => assignment_name(line)?,
            NameRule::BareCall => bare_call_name(line)?,
        };
        Some(NameMatch { rule: *self, name })
    }
}

impl std::fmt::Display for NameRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn keyword_name(line: &str) -> Option<String> {
    if !matches(Rule::FunctionKeyword, line) {
        return None;
    }

    // A tab after `function` still matches the rule but has no literal
    // `function ` to split on; that yields an empty name.
    let name = line
        .split(FUNCTION_KEYWORD)
        .nth(1)
        .and_then(|segment| segment.split('(').next())
        .map(strip_whitespace)
        .unwrap_or_default();
    Some(name)
}

/// Text left of the parameter list, or `None` if there is no `(...)`.
fn text_before_params(line: &str) -> Option<&str> {
    let params = table()?.get(Rule::ParameterList).find(line)?;
    Some(&line[..params.start()])
}

fn assignment_name(line: &str) -> Option<String> {
    let left = text_before_params(line)?;
    let (binding, _) = left.split_once('=')?;
    let noise = table()?.get(Rule::BindingNoise);
    Some(noise.replace_all(binding, "").into_owned())
}

fn bare_call_name(line: &str) -> Option<String> {
    let left = text_before_params(line)?;
    if left.contains('=') {
        return None;
    }
    Some(strip_whitespace(left))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Resolve a function name through [`NameRule::ORDER`].
pub fn resolve_function_name(line: &str) -> Option<NameMatch> {
    let found = NameRule::ORDER.iter().find_map(|rule| rule.apply(line));
    if let Some(m) = &found {
        tracing::trace!(rule = %m.rule, name = %m.name, "resolved function name");
    }
    found
}

/// Extract the function name from a function header line.
///
/// Returns an empty string when no name can be determined, including lines
/// without any parenthesized segment. The line is not checked with
/// [`is_named_function_declaration`] first.
pub fn extract_function_name(line: &str) -> String {
    resolve_function_name(line)
        .map(|m| m.name)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_function_declarations() {
        assert!(is_named_function_declaration("function doThing(x) {"));
        assert!(is_named_function_declaration("export function run() {"));
        assert!(is_named_function_declaration("greet(name: string): void {"));
        assert!(is_named_function_declaration(
            "merge(a: Array<Map<string, number[]>>, b: number): boolean {"
        ));
    }

    #[test]
    fn test_named_function_expressions() {
        assert!(is_named_function_declaration("const handler = (x) => {"));
        assert!(is_named_function_declaration("let f = function(a, b) {"));
        assert!(is_named_function_declaration("var f = function named(a) {"));
        assert!(is_named_function_declaration("this.onClick = (e) => {"));
    }

    #[test]
    fn test_anonymous_function_is_excluded() {
        assert!(is_anonymous_function_declaration("function (x) {"));
        assert!(is_anonymous_function_declaration("function(x) {"));
        assert!(!is_named_function_declaration("function (x) {"));
        // header rule alone would accept it
        assert!(is_named_function_header("function(x) {"));
        assert!(!is_named_function_declaration("function(x) {"));
    }

    #[test]
    fn test_anonymous_exclusion_does_not_block_expressions() {
        let line = "const f = function(x) {";
        assert!(is_anonymous_function_declaration(line));
        assert!(is_named_function_expression(line));
        assert!(is_named_function_declaration(line));
    }

    #[test]
    fn test_non_function_lines() {
        assert!(!is_named_function_declaration("const x = 1;"));
        assert!(!is_named_function_declaration("foo(bar);"));
        assert!(!is_named_function_declaration("doThing(x)"));
        assert!(!is_named_function_declaration(""));
    }

    #[test]
    fn test_control_statements() {
        assert!(is_built_in_control_statement("if (x > 0) {"));
        assert!(is_built_in_control_statement("switch (action.type) {"));
        assert!(is_built_in_control_statement("while(true){"));
        assert!(is_built_in_control_statement("for (let i = 0; i < n; i++) {"));
        assert!(!is_built_in_control_statement("if (x > 0)"));
        assert!(!is_built_in_control_statement("do {"));
    }

    #[test]
    fn test_control_statement_with_space_is_not_a_function() {
        assert!(!is_named_function_declaration("if (x > 0) {"));
    }

    #[test]
    fn test_control_statement_and_function_are_independent() {
        // No space before `(` lets the header rule fire too.
        let line = "if(x > 0) {";
        assert!(is_built_in_control_statement(line));
        assert!(is_named_function_declaration(line));
    }

    #[test]
    fn test_extract_keyword_function_name() {
        assert_eq!(extract_function_name("function doThing(x) {"), "doThing");
        assert_eq!(extract_function_name("export function  spaced (a) {"), "spaced");
        assert_eq!(extract_function_name("var f = function named(a) {"), "named");
    }

    #[test]
    fn test_extract_keyword_function_name_with_tab() {
        let m = resolve_function_name("function\tfoo(a) {").unwrap();
        assert_eq!(m.rule, NameRule::FunctionKeyword);
        assert_eq!(m.name, "");
    }

    #[test]
    fn test_extract_assigned_function_name() {
        assert_eq!(extract_function_name("const handler = (x) => {"), "handler");
        assert_eq!(extract_function_name("let  total = (a, b) => {"), "total");
        assert_eq!(extract_function_name("var x=function(a){"), "x");
        assert_eq!(extract_function_name("this.onClick = (e) => {"), "this.onClick");
    }

    #[test]
    fn test_extract_bare_call_name() {
        assert_eq!(extract_function_name("greet(name: string): void {"), "greet");
        assert_eq!(extract_function_name("  render() {"), "render");
        // modifiers are not stripped
        assert_eq!(extract_function_name("async load(url) {"), "asyncload");
    }

    #[test]
    fn test_extract_without_params() {
        assert_eq!(extract_function_name("const x = 1;"), "");
        assert_eq!(extract_function_name("foo("), "");
        assert!(resolve_function_name("no parens here").is_none());
    }

    #[test]
    fn test_name_rules_in_isolation() {
        let line = "const handler = (x) => {";
        assert!(NameRule::FunctionKeyword.apply(line).is_none());
        assert!(NameRule::BareCall.apply(line).is_none());
        assert_eq!(
            NameRule::Assignment.apply(line),
            Some(NameMatch {
                rule: NameRule::Assignment,
                name: "handler".into(),
            })
        );

        let line = "greet(name) {";
        assert!(NameRule::Assignment.apply(line).is_none());
        assert_eq!(NameRule::BareCall.apply(line).unwrap().name, "greet");
    }

    #[test]
    fn test_keyword_rule_takes_precedence() {
        let m = resolve_function_name("const f = function named(a) {").unwrap();
        assert_eq!(m.rule, NameRule::FunctionKeyword);
        assert_eq!(m.name, "named");
    }
}
