use std::path::Path;

use css_classes_core::{ClassRecord, EscapedClass};

use crate::{GeneratorConfig, Result};

/// Renders `CssClasses` module from collected classes.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Path where the generated module should be saved.
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Escape class names and render module text.
    ///
    /// In strict mode, returns error for names that would not compile.
    /// Otherwise such names are left for rustc to report, duplicates are only logged.
    pub fn generate(&self, records: &[ClassRecord]) -> Result<String> {
        let classes = self.escape(records);
        if self.config.strict {
            css_classes_core::validate(&classes)?;
        } else {
            for duplicate in css_classes_core::duplicates(&classes) {
                log::warn!(
                    "Classes `{}` and `{}` are both escaped to field `{}`, generated module will not compile",
                    duplicate.first,
                    duplicate.second,
                    duplicate.escaped
                );
            }
        }
        Ok(css_classes_core::emit_with(
            &classes,
            self.config.line_ending,
        ))
    }

    /// Escape class names with configured replacement table.
    pub fn escape<'a>(&self, records: &'a [ClassRecord]) -> Vec<EscapedClass<'a>> {
        css_classes_core::escape_classes(records, &self.config.replace)
    }
}
