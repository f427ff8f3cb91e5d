//! Syntactic construct kinds a line can be classified into.

use serde::{Deserialize, Serialize};

/// The syntactic role of a single line of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructKind {
    /// `class Foo extends Bar {`
    ClassDeclaration,
    /// `function foo(a) {` or a typed header like `foo(a: string): void {`
    NamedFunctionDeclaration,
    /// `const foo = (a) => {` / `const foo = function (a) {`
    NamedFunctionExpression,
    /// `function (a) {`
    AnonymousFunctionDeclaration,
    /// `if (..) {`, `switch (..) {`, `while (..) {`, `for (..) {`
    BuiltInControlStatement,
    /// Nothing recognised.
    #[default]
    None,
}

impl ConstructKind {
    /// All recognisable kinds, in classification order.
    pub fn all() -> &'static [ConstructKind] {
        &[
            ConstructKind::ClassDeclaration,
            ConstructKind::NamedFunctionDeclaration,
            ConstructKind::NamedFunctionExpression,
            ConstructKind::AnonymousFunctionDeclaration,
            ConstructKind::BuiltInControlStatement,
        ]
    }

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::ClassDeclaration => "class_declaration",
            ConstructKind::NamedFunctionDeclaration => "named_function_declaration",
            ConstructKind::NamedFunctionExpression => "named_function_expression",
            ConstructKind::AnonymousFunctionDeclaration => "anonymous_function_declaration",
            ConstructKind::BuiltInControlStatement => "built_in_control_statement",
            ConstructKind::None => "none",
        }
    }

    /// Whether this kind names a function (declaration or expression).
    pub fn is_named_function(&self) -> bool {
        matches!(
            self,
            ConstructKind::NamedFunctionDeclaration | ConstructKind::NamedFunctionExpression
        )
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConstructKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "class_declaration" | "class" => Ok(ConstructKind::ClassDeclaration),
            "named_function_declaration" => Ok(ConstructKind::NamedFunctionDeclaration),
            "named_function_expression" => Ok(ConstructKind::NamedFunctionExpression),
            "anonymous_function_declaration" => Ok(ConstructKind::AnonymousFunctionDeclaration),
            "built_in_control_statement" | "control" => Ok(ConstructKind::BuiltInControlStatement),
            "none" => Ok(ConstructKind::None),
            _ => Err(format!("unknown construct kind: {}", s)),
        }
    }
}
