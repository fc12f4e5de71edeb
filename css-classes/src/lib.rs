//! Typed css classes.
//!
//! The purpose of this library is to reference css classes in rust code
//! through fields of a generated struct instead of raw strings:
//!
//! ```rust,ignore
//! mod css_classes;
//! use css_classes::C;
//!
//! let html = format!(r#"<div class="{} {}">"#, C.container, C.md__w_3of5);
//! ```
//!
//! Collector finds every `C.<class>` in the project, and gives the list of
//! [`ClassRecord`]s to [`Generator`], which renders `css_classes.rs`.
//!
//! Example:
//! ```rust
//! use css_classes::{ClassOccurrence, ClassRecord, Generator, GeneratorConfig, LineEnding};
//!
//! let config = GeneratorConfig::from_toml_str(r#"line-ending = "lf""#).unwrap();
//! let generator = Generator::new(config);
//! let text = generator
//!     .generate(&[ClassRecord::with_properties(
//!         "md:flex",
//!         vec![ClassOccurrence::with_media_query(
//!             "display: flex",
//!             "@media (min-width: 768px)",
//!         )],
//!     )])
//!     .unwrap();
//! assert!(text.contains("    /// display: flex;    @media (min-width: 768px)\n"));
//! assert!(text.contains("    md__flex: \"md:flex\",\n"));
//! ```

pub mod config;
mod generator;

pub use config::GeneratorConfig;
pub use generator::Generator;

pub use css_classes_core::{
    emit, emit_with, escape, escape_classes, validate, ClassOccurrence, ClassRecord,
    EscapedClass, LineEnding, Replacement, ReplacementTable,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] css_classes_core::Error),
    #[error("Failed to parse configuration")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to read configuration")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
