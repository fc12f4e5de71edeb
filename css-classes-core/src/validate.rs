use std::collections::HashMap;

use crate::{EscapedClass, Error, Result};

/// Two classes that are escaped to the same field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duplicate<'a> {
    pub escaped: &'a str,
    pub first: &'a str,
    pub second: &'a str,
}

/// Returns every class whose field name was already taken by an earlier class.
pub fn duplicates<'a>(classes: &'a [EscapedClass]) -> Vec<Duplicate<'a>> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut result = Vec::new();
    for class in classes {
        if let Some(&first) = seen.get(class.escaped_name()) {
            result.push(Duplicate {
                escaped: class.escaped_name(),
                first,
                second: class.name(),
            });
        } else {
            seen.insert(class.escaped_name(), class.name());
        }
    }
    result
}

/// Check that generated module will compile.
///
/// Returns first problem in input order:
/// - class name that would break string literal,
/// - property or media query with a line break, which would end the doc comment,
/// - field name that is not a rust identifier (keyword, `_`, punctuation),
/// - field name already used by previous class.
pub fn validate(classes: &[EscapedClass]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for class in classes {
        if class.name().contains(['"', '\\', '\n', '\r']) {
            return Err(Error::UnquotableName {
                name: class.name().to_owned(),
            });
        }
        let multiline = class.properties().iter().any(|occurrence| {
            std::iter::once(occurrence.property.as_str())
                .chain(occurrence.media_query())
                .any(|text| text.contains(['\n', '\r']))
        });
        if multiline {
            return Err(Error::MultilineDocComment {
                name: class.name().to_owned(),
            });
        }
        if syn::parse_str::<syn::Ident>(class.escaped_name()).is_err() {
            return Err(Error::InvalidIdent {
                name: class.name().to_owned(),
                escaped: class.escaped_name().to_owned(),
            });
        }
        if let Some(first) = seen.insert(class.escaped_name(), class.name()) {
            return Err(Error::DuplicateField {
                escaped: class.escaped_name().to_owned(),
                first: first.to_owned(),
                second: class.name().to_owned(),
            });
        }
    }
    Ok(())
}
