//! Rendering of the generated `CssClasses` module.
//!
//! Output layout:
//! ```text
//!
//! // DO NOT EDIT THIS FILE - IT'S GENERATED, CHANGES WILL BE LOST!
//!
//! #[allow(non_snake_case, dead_code)]
//! pub struct CssClasses<'a> {
//!     /// max-width: 576px;    @media (min-width: 576px)
//!     pub container: &'a str,
//!
//!     /// width: 60%;
//!     pub w_3of5: &'a str,
//! }
//!
//! pub const C: CssClasses = CssClasses {
//!     container: "container",
//!     w_3of5: "w-3/5",
//! };
//! ```

use std::str::FromStr;

use indexmap::IndexSet;

use crate::{ClassOccurrence, EscapedClass, Error};

pub const WARNING: &str = "// DO NOT EDIT THIS FILE - IT'S GENERATED, CHANGES WILL BE LOST!";

// You probably won't use all classes (dead_code)
// and most of them will not be in snake_case (non_snake_case).
pub const ATTRIBUTES: &str = "#[allow(non_snake_case, dead_code)]";

pub const STRUCT_NAME: &str = "CssClasses";
pub const INSTANCE_NAME: &str = "C";

const INDENT: &str = "    ";

/// Line terminator used in generated text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// `CrLf` on windows, `Lf` elsewhere.
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            "native" => Ok(LineEnding::Native),
            _ => Err(Error::UnknownLineEnding(s.to_owned())),
        }
    }
}

/// Render generated module with platform line endings.
pub fn emit(classes: &[EscapedClass]) -> String {
    emit_with(classes, LineEnding::Native)
}

/// Render generated module.
///
/// Fields and instance entries follow the order of `classes`.
pub fn emit_with(classes: &[EscapedClass], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut result = String::new();
    result.push_str(eol);
    result.push_str(WARNING);
    result.push_str(eol);
    result.push_str(eol);
    result.push_str(ATTRIBUTES);
    result.push_str(eol);
    result.push_str(&struct_definition(classes, eol));
    result.push_str(eol);
    result.push_str(eol);
    result.push_str(&struct_instance(classes, eol));
    result.push_str(eol);
    log::debug!(
        "Emitted {STRUCT_NAME} with {} fields ({} bytes)",
        classes.len(),
        result.len()
    );
    result
}

fn struct_definition(classes: &[EscapedClass], eol: &str) -> String {
    // Struct without fields can't have unused lifetime.
    let lifetime = if classes.is_empty() { "" } else { "<'a>" };
    let fields = classes
        .iter()
        .map(|class| struct_field(class, eol))
        .collect::<Vec<_>>()
        .join(eol);
    format!("pub struct {STRUCT_NAME}{lifetime} {{{eol}{fields}}}")
}

fn struct_field(class: &EscapedClass, eol: &str) -> String {
    format!(
        "{}{INDENT}pub {}: &'a str,{eol}",
        doc_comment(class, eol),
        class.escaped_name()
    )
}

fn struct_instance(classes: &[EscapedClass], eol: &str) -> String {
    let fields = classes
        .iter()
        .map(|class| format!("{INDENT}{}: \"{}\",{eol}", class.escaped_name(), class.name()))
        .collect::<String>();
    format!("pub const {INSTANCE_NAME}: {STRUCT_NAME} = {STRUCT_NAME} {{{eol}{fields}}};")
}

/// Doc lines of a field, one per distinct occurrence.
fn doc_comment(class: &EscapedClass, eol: &str) -> String {
    class
        .properties()
        .iter()
        .map(|occurrence| doc_line(occurrence, eol))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

fn doc_line(occurrence: &ClassOccurrence, eol: &str) -> String {
    match occurrence.media_query() {
        Some(media_query) => format!(
            "{INDENT}/// {};{INDENT}{media_query}{eol}",
            occurrence.property
        ),
        None => format!("{INDENT}/// {};{eol}", occurrence.property),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{escape_classes, ClassRecord, ReplacementTable};

    fn emit_lf(records: &[ClassRecord]) -> String {
        let classes = escape_classes(records, &ReplacementTable::default());
        emit_with(&classes, LineEnding::Lf)
    }

    #[test]
    fn check_empty_classes() {
        let output = emit_lf(&[]);
        let expected = "\n\
            // DO NOT EDIT THIS FILE - IT'S GENERATED, CHANGES WILL BE LOST!\n\
            \n\
            #[allow(non_snake_case, dead_code)]\n\
            pub struct CssClasses {\n\
            }\n\
            \n\
            pub const C: CssClasses = CssClasses {\n\
            };\n";
        assert_eq!(output, expected);
        syn::parse_file(&output).unwrap();
    }

    #[test]
    fn check_single_class() {
        let records = vec![ClassRecord::with_properties(
            "container",
            vec![
                ClassOccurrence::with_media_query("max-width: 576px", "@media (min-width: 576px)"),
                ClassOccurrence::with_media_query("max-width: 768px", "@media (min-width: 768px)"),
            ],
        )];
        let output = emit_lf(&records);
        let expected = r#"
// DO NOT EDIT THIS FILE - IT'S GENERATED, CHANGES WILL BE LOST!

#[allow(non_snake_case, dead_code)]
pub struct CssClasses<'a> {
    /// max-width: 576px;    @media (min-width: 576px)
    /// max-width: 768px;    @media (min-width: 768px)
    pub container: &'a str,
}

pub const C: CssClasses = CssClasses {
    container: "container",
};
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn identical_occurrences_collapse() {
        let records = vec![ClassRecord::with_properties(
            "p-4",
            vec![
                ClassOccurrence::new("padding: 1rem"),
                ClassOccurrence::with_media_query("padding: 1rem", "@media print"),
                ClassOccurrence::new("padding: 1rem"),
                ClassOccurrence::with_media_query("padding: 1rem", "@media print"),
                ClassOccurrence::with_media_query("padding: 2rem", "@media print"),
            ],
        )];
        let classes = escape_classes(&records, &ReplacementTable::default());
        let comment = doc_comment(&classes[0], "\n");
        assert_eq!(
            comment,
            "    /// padding: 1rem;\n\
             \x20   /// padding: 1rem;    @media print\n\
             \x20   /// padding: 2rem;    @media print\n"
        );
    }

    #[test]
    fn empty_media_query_is_omitted() {
        let occurrence = ClassOccurrence::with_media_query("color: red", "");
        assert_eq!(doc_line(&occurrence, "\n"), "    /// color: red;\n");
    }

    #[test]
    fn fields_follow_input_order() {
        let records = vec![
            ClassRecord::new("z-10"),
            ClassRecord::new("block"),
            ClassRecord::new("md:flex"),
        ];
        let output = emit_lf(&records);

        let field_positions = ["pub z_10:", "pub block:", "pub md__flex:"]
            .map(|field| output.find(field).unwrap());
        assert!(field_positions.windows(2).all(|w| w[0] < w[1]));

        let entry_positions = [
            "    z_10: \"z-10\",",
            "    block: \"block\",",
            "    md__flex: \"md:flex\",",
        ]
        .map(|entry| output.find(entry).unwrap());
        assert!(entry_positions.windows(2).all(|w| w[0] < w[1]));
        assert!(field_positions[2] < entry_positions[0]);
    }

    #[test]
    fn fields_are_separated_by_blank_line() {
        let records = vec![ClassRecord::new("a"), ClassRecord::new("b")];
        let output = emit_lf(&records);
        assert!(output.contains("    pub a: &'a str,\n\n    pub b: &'a str,\n}"));
    }

    #[test]
    fn instance_keeps_original_names() {
        let records = vec![
            ClassRecord::new("w-3/5"),
            ClassRecord::new("2xl"),
            ClassRecord::new("type"),
        ];
        let output = emit_lf(&records);
        let file = syn::parse_file(&output).unwrap();

        let Some(syn::Item::Const(instance)) = file.items.last() else {
            panic!("Expected const instance as last item");
        };
        let syn::Expr::Struct(instance) = instance.expr.as_ref() else {
            panic!("Expected struct expression");
        };
        let fields = instance
            .fields
            .iter()
            .map(|field| {
                let syn::Member::Named(ident) = &field.member else {
                    panic!("Expected named field");
                };
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(value),
                    ..
                }) = &field.expr
                else {
                    panic!("Expected string literal");
                };
                (ident.to_string(), value.value())
            })
            .collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec![
                ("w_3of5".to_owned(), "w-3/5".to_owned()),
                ("_2xl".to_owned(), "2xl".to_owned()),
                ("type_".to_owned(), "type".to_owned()),
            ]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let records = vec![ClassRecord::with_properties(
            "flex",
            vec![ClassOccurrence::new("display: flex")],
        )];
        let classes = escape_classes(&records, &ReplacementTable::default());
        let output = emit_with(&classes, LineEnding::CrLf);
        assert!(output.starts_with("\r\n"));
        assert!(output.ends_with("};\r\n"));
        assert_eq!(output.matches('\n').count(), output.matches("\r\n").count());
        assert_eq!(output.replace("\r\n", "\n"), emit_with(&classes, LineEnding::Lf));
    }

    #[test]
    fn emit_uses_native_line_endings() {
        let records = vec![
            ClassRecord::with_properties("flex", vec![ClassOccurrence::new("display: flex")]),
            ClassRecord::new("w-1/2"),
        ];
        let classes = escape_classes(&records, &ReplacementTable::default());
        let output = emit(&classes);
        assert_eq!(output, emit_with(&classes, LineEnding::Native));
        assert_eq!(output, emit_with(&classes, LineEnding::default()));
        assert!(output.starts_with(LineEnding::Native.as_str()));

        let native = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::Native.as_str(), native);
        assert!(output.ends_with(&format!("}};{native}")));
    }

    #[test]
    fn check_line_ending_from_str() {
        assert_eq!("lf".parse::<LineEnding>().unwrap(), LineEnding::Lf);
        assert_eq!("CRLF".parse::<LineEnding>().unwrap(), LineEnding::CrLf);
        assert_eq!("native".parse::<LineEnding>().unwrap(), LineEnding::Native);
        assert!(matches!(
            "cr".parse::<LineEnding>(),
            Err(Error::UnknownLineEnding(_))
        ));
    }
}
