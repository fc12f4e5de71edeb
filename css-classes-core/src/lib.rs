//! Core of css-classes.
//!
//! Turns a list of CSS classes found in a project into the text of a Rust
//! module with a single `CssClasses` struct, so that classes are referenced as
//! `C.my_class` and typos are caught by the compiler.
//!
//! The pipeline has two pure stages:
//! - [`escape`] maps a class name like `md:w-3/5` into a field name like `md__w_3of5`,
//! - [`emit`] renders escaped classes into the generated file.
//!
//! Example:
//! ```rust
//! use css_classes_core::{ClassOccurrence, ClassRecord, ReplacementTable};
//!
//! let records = vec![ClassRecord::with_properties(
//!     "w-3/5",
//!     vec![ClassOccurrence::new("width: 60%")],
//! )];
//! let classes = css_classes_core::escape_classes(&records, &ReplacementTable::default());
//! assert_eq!(classes[0].escaped_name(), "w_3of5");
//!
//! let text = css_classes_core::emit_with(&classes, css_classes_core::LineEnding::Lf);
//! assert!(text.contains("    pub w_3of5: &'a str,\n"));
//! assert!(text.contains("    w_3of5: \"w-3/5\",\n"));
//! ```

use thiserror::Error;

mod class;
pub mod emit;
pub mod escape;
mod validate;

pub use class::{ClassOccurrence, ClassRecord, EscapedClass};
pub use emit::{emit, emit_with, LineEnding};
pub use escape::{escape, escape_classes, is_reserved, Replacement, ReplacementTable};
pub use validate::{duplicates, validate, Duplicate};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to compile replacement pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
    #[error("Unknown line ending `{0}`, expected one of: lf, crlf, native")]
    UnknownLineEnding(String),
    #[error("Class `{name}` is escaped to `{escaped}`, which is not a valid field name")]
    InvalidIdent { name: String, escaped: String },
    #[error("Classes `{first}` and `{second}` are both escaped to field `{escaped}`")]
    DuplicateField {
        escaped: String,
        first: String,
        second: String,
    },
    #[error("Class `{name}` has a css property or media query spanning several lines")]
    MultilineDocComment { name: String },
    #[error("Class `{name}` cannot be emitted as a string literal")]
    UnquotableName { name: String },
}
