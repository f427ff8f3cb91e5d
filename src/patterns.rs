//! The pattern table shared by every detector.
//!
//! Each heuristic is a named [`Rule`] backed by one regex. The table is
//! compiled once per process and never mutated afterwards.
//!
//! Word classes are spelled out as ASCII (`[0-9A-Za-z_]`) so identifiers
//! match the way they do in the languages being classified.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ClassifyError;

/// A single named pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `class <Letters> ... {`
    ClassDeclaration,
    /// `<word>(<params>)<return type> {`, with typed parameter lists.
    NamedHeader,
    /// `function (<params>) {` with no name between keyword and `(`.
    AnonymousFunction,
    /// `<name> = [function] [<name>] (<params>) [=>] {`
    NamedExpression,
    /// `if|switch|while|for (<expr>) {`
    ControlStatement,
    /// `function <Letters>(<params>) {`
    FunctionKeyword,
    /// The parenthesized argument list of a header.
    ParameterList,
    /// Keywords and punctuation stripped from a bound identifier.
    BindingNoise,
}

impl Rule {
    /// Every rule, in table order.
    pub const ALL: [Rule; 8] = [
        Rule::ClassDeclaration,
        Rule::NamedHeader,
        Rule::AnonymousFunction,
        Rule::NamedExpression,
        Rule::ControlStatement,
        Rule::FunctionKeyword,
        Rule::ParameterList,
        Rule::BindingNoise,
    ];

    /// Human-readable rule name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ClassDeclaration => "class declaration",
            Rule::NamedHeader => "named function header",
            Rule::AnonymousFunction => "anonymous function",
            Rule::NamedExpression => "named function expression",
            Rule::ControlStatement => "control statement",
            Rule::FunctionKeyword => "function keyword",
            Rule::ParameterList => "parameter list",
            Rule::BindingNoise => "binding noise",
        }
    }

    /// Regex source for this rule.
    pub fn pattern(&self) -> &'static str {
        match self {
            Rule::ClassDeclaration => r"class\s+[a-zA-Z]+.*\{",
            // name, `(`, typed params, `)`, return type, `{`
            Rule::NamedHeader => concat!(
                r"([0-9A-Za-z_]{1,200}?)\b",
                r"(\()",
                r"([0-9A-Za-z_:,<>\t \[\]]{0,200})",
                r"(\))",
                r"([0-9A-Za-z_:,<>\t \[\]]{0,200})",
                r"(\{)",
            ),
            Rule::AnonymousFunction => r"function\s*\(.*\)\s*\{",
            Rule::NamedExpression => {
                r"[a-zA-Z]+\s*=\s*(?:function)?\s*[a-zA-Z]*\s*\(.*\)\s*(?:=>)?\s*\{"
            }
            Rule::ControlStatement => r"(?:if|switch|while|for)\s*\(.*\)\s*\{",
            Rule::FunctionKeyword => r"function\s+[a-zA-Z]+\s*\(.*\)\s*\{",
            Rule::ParameterList => r"\(.*\)",
            Rule::BindingNoise => r"const |var |let |=|\s+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled regexes for every [`Rule`].
#[derive(Debug, Clone)]
pub struct PatternTable {
    regexes: Vec<Regex>,
}

impl PatternTable {
    /// Compile every rule.
    ///
    /// Fails with [`ClassifyError::Pattern`] naming the first rule that does
    /// not compile.
    pub fn compile() -> Result<Self, ClassifyError> {
        let regexes = Rule::ALL
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern()).map_err(|source| ClassifyError::Pattern {
                    rule: rule.name(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { regexes })
    }

    /// The compiled regex for `rule`.
    pub fn get(&self, rule: Rule) -> &Regex {
        &self.regexes[rule.index()]
    }

    /// Whether `rule` matches anywhere in `line`.
    pub fn is_match(&self, rule: Rule, line: &str) -> bool {
        self.get(rule).is_match(line)
    }
}

// Shared table, initialized on first use. A compile failure is remembered as
// `None` so it is only logged once.
static TABLE: OnceLock<Option<PatternTable>> = OnceLock::new();

/// The process-wide pattern table, or `None` if it failed to compile.
pub fn table() -> Option<&'static PatternTable> {
    TABLE
        .get_or_init(|| match PatternTable::compile() {
            Ok(table) => Some(table),
            Err(e) => {
                tracing::warn!(error = %e, "line patterns unavailable; all detectors will report no match");
                None
            }
        })
        .as_ref()
}

/// Whether `rule` matches `line` using the shared table.
///
/// Returns `false` when the table is unavailable.
pub(crate) fn matches(rule: Rule, line: &str) -> bool {
    table().is_some_and(|t| t.is_match(rule, line))
}
