//! Whole-line classification built on the individual detectors.

use serde::Serialize;
use smallvec::SmallVec;

use crate::class::{extract_class_name, is_class_declaration};
use crate::errors::ClassifyError;
use crate::function::{
    extract_function_name, is_anonymous_function_declaration, is_built_in_control_statement,
    is_named_function_declaration, is_named_function_expression,
};
use crate::kind::ConstructKind;

/// Options for [`classify_with_options`].
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Recover the identifier for class and named function lines.
    pub extract_names: bool,
    /// Drop named function kinds from lines that are also control statements.
    pub control_statements_win: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            extract_names: true,
            control_statements_win: false,
        }
    }
}

impl ClassifyOptions {
    /// Report kinds only, without recovering names.
    pub fn kinds_only() -> Self {
        Self {
            extract_names: false,
            control_statements_win: false,
        }
    }

    /// Let control statements override named function kinds.
    pub fn disambiguated() -> Self {
        Self {
            extract_names: true,
            control_statements_win: true,
        }
    }
}

/// Every construct a line matched, and the identifier it declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Matching kinds, in [`ConstructKind::all`] order.
    pub kinds: SmallVec<[ConstructKind; 4]>,
    /// Class or function name; `None` if not requested or not recoverable.
    pub name: Option<String>,
}

impl Classification {
    /// Whether `kind` was matched.
    pub fn is(&self, kind: ConstructKind) -> bool {
        if kind == ConstructKind::None {
            return self.kinds.is_empty();
        }
        self.kinds.contains(&kind)
    }

    /// Whether no detector matched.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The first matched kind, or [`ConstructKind::None`].
    pub fn primary(&self) -> ConstructKind {
        self.kinds.first().copied().unwrap_or_default()
    }
}

/// Classify `line` with default options.
///
/// # Examples
///
/// ```
/// use linecode::{classify, ConstructKind};
///
/// let c = classify("class Foo extends Bar {");
/// assert_eq!(c.primary(), ConstructKind::ClassDeclaration);
/// assert_eq!(c.name.as_deref(), Some("Foo"));
/// ```
pub fn classify(line: &str) -> Classification {
    classify_with_options(line, &ClassifyOptions::default())
}

/// Classify `line`, running every detector once.
pub fn classify_with_options(line: &str, options: &ClassifyOptions) -> Classification {
    let mut kinds: SmallVec<[ConstructKind; 4]> = SmallVec::new();

    let is_control = is_built_in_control_statement(line);
    let suppress_functions = options.control_statements_win && is_control;

    if is_class_declaration(line) {
        kinds.push(ConstructKind::ClassDeclaration);
    }
    // A named line is never also anonymous, even when the named kinds are
    // suppressed in favour of a control statement.
    let is_named = is_named_function_declaration(line);
    if !suppress_functions {
        if is_named {
            kinds.push(ConstructKind::NamedFunctionDeclaration);
        }
        if is_named_function_expression(line) {
            kinds.push(ConstructKind::NamedFunctionExpression);
        }
    }
    if !is_named && is_anonymous_function_declaration(line) {
        kinds.push(ConstructKind::AnonymousFunctionDeclaration);
    }
    if is_control {
        kinds.push(ConstructKind::BuiltInControlStatement);
    }

    let name = if options.extract_names {
        name_for(line, &kinds)
    } else {
        None
    };

    tracing::trace!(line, kinds = ?kinds, name = ?name, "classified line");

    Classification { kinds, name }
}

fn name_for(line: &str, kinds: &[ConstructKind]) -> Option<String> {
    let name = match kinds.first()? {
        ConstructKind::ClassDeclaration => extract_class_name(line),
        kind if kind.is_named_function() => extract_function_name(line),
        _ => return None,
    };
    (!name.is_empty()).then_some(name)
}

/// Extract a class name, failing unless `line` is a class declaration.
pub fn try_extract_class_name(line: &str) -> Result<String, ClassifyError> {
    let kind = ConstructKind::ClassDeclaration;
    if !is_class_declaration(line) {
        return Err(ClassifyError::NotAConstruct {
            kind,
            line: line.to_string(),
        });
    }
    non_empty(extract_class_name(line), kind, line)
}

/// Extract a function name, failing unless `line` declares a named function.
pub fn try_extract_function_name(line: &str) -> Result<String, ClassifyError> {
    let kind = ConstructKind::NamedFunctionDeclaration;
    if !is_named_function_declaration(line) {
        return Err(ClassifyError::NotAConstruct {
            kind,
            line: line.to_string(),
        });
    }
    non_empty(extract_function_name(line), kind, line)
}

fn non_empty(name: String, kind: ConstructKind, line: &str) -> Result<String, ClassifyError> {
    if name.is_empty() {
        return Err(ClassifyError::NoIdentifier {
            kind,
            line: line.to_string(),
        });
    }
    Ok(name)
}
