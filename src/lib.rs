//! Linecode - classify single lines of JavaScript/TypeScript.
//!
//! Linecode looks at one line of source at a time and tells whether it opens
//! a class, a named function, an anonymous function or a built-in control
//! statement, and recovers the declared name where there is one. It is a
//! heuristic pattern matcher, not a parser: nothing spans lines and no state
//! is kept between calls.
//!
//! # Quick Start
//!
//! ```
//! use linecode::{extract_function_name, is_built_in_control_statement, is_named_function_declaration};
//!
//! let line = "const handler = (event) => {";
//! assert!(is_named_function_declaration(line));
//! assert_eq!(extract_function_name(line), "handler");
//!
//! assert!(is_built_in_control_statement("if (x > 0) {"));
//! ```
//!
//! # Modules
//!
//! - [`class`] - Class header detection and name extraction
//! - [`function`] - Function and control statement detection, name rules
//! - [`classify`] - All detectors at once, with options
//! - [`patterns`] - The shared pattern table
//! - [`kind`] - Construct kinds
//! - [`errors`] - Error types
//!
//! # Limitations
//!
//! - Headers whose `{` is on a later line are never detected.
//! - Extractors do not check the line first; use the `try_` variants for
//!   that.
//! - A control statement written like a call (`if(x) {`) also satisfies
//!   [`is_named_function_declaration`]. See [`ClassifyOptions`].

pub mod kind;
pub mod errors;
pub mod patterns;
pub mod class;
pub mod function;
pub mod classify;

// Re-export key types at crate root for convenience
pub use class::{extract_class_name, is_class_declaration};
pub use classify::{
    classify, classify_with_options, try_extract_class_name, try_extract_function_name,
    Classification, ClassifyOptions,
};
pub use errors::ClassifyError;
pub use function::{
    extract_function_name, is_anonymous_function_declaration, is_built_in_control_statement,
    is_named_function_declaration, is_named_function_expression, is_named_function_header,
    resolve_function_name, NameMatch, NameRule,
};
pub use kind::ConstructKind;
pub use patterns::{PatternTable, Rule};
