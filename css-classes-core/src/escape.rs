//! Class name escaping.
//!
//! Rust doesn't allow to use any string as a field name, so each class name
//! goes through an ordered list of regex replacements.
//! Later replacements see the result of earlier ones.
//!
//! Escaping is not injective: `a-b` and `a_b` both become `a_b`.
//! Use [`crate::validate`] to detect such collisions.

use std::borrow::Cow;

use fancy_regex::Regex;

use crate::{ClassRecord, EscapedClass, Error, Result};

/// Replacements used when no table is configured.
///
/// The last rule is a zero-width match, it prefixes leading digit with `_`
/// instead of replacing it.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("-", "_"),
    (":", "__"),
    ("/", "of"),
    ("@", "_at_"),
    (r"\.", "_p_"),
    (r"^(?=\d)", "_"),
];

/// Suffix appended to escaped names that are rust keywords.
pub const RESERVED_SUFFIX: &str = "_";

// https://doc.rust-lang.org/reference/keywords.html
// Raw identifiers are not an option, since `r#self` and `r#crate` are invalid.
const RESERVED_WORDS: &[&str] = &[
    // strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "Self", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // reserved
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // `gen` is reserved only since edition 2024, generated module is 2021 code.
];

/// Returns true if `name` is a keyword and cannot be used as a field name.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Single `pattern -> replacement` rule.
#[derive(Clone, Debug)]
pub struct Replacement {
    pattern: Regex,
    replacement: String,
}

impl Replacement {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        let this = Self {
            pattern: regex,
            replacement: replacement.into(),
        };
        for group in this.unknown_groups() {
            log::warn!(
                "Replacement `{}` for pattern `{pattern}` references missing group `{group}`, \
                 it will expand to nothing (use `${{1}}` to separate group index from text)",
                this.replacement
            );
        }
        Ok(this)
    }

    /// Groups referenced by replacement text that are not defined by pattern.
    pub fn unknown_groups(&self) -> Vec<&str> {
        group_references(&self.replacement)
            .into_iter()
            .filter(|group| match group.parse::<usize>() {
                Ok(index) => index >= self.pattern.captures_len(),
                Err(_) => !self.pattern.capture_names().flatten().any(|n| n == *group),
            })
            .collect()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace all non-overlapping matches.
    ///
    /// Regex runtime errors (backtrack limit) leave input unchanged.
    fn apply<'t>(&self, name: &'t str) -> Cow<'t, str> {
        match self
            .pattern
            .try_replacen(name, 0, self.replacement.as_str())
        {
            Ok(replaced) => replaced,
            Err(e) => {
                log::warn!(
                    "Skipping replacement `{}` for class `{name}`: {e}",
                    self.pattern()
                );
                Cow::Borrowed(name)
            }
        }
    }
}

// Follows `$name`/`${name}` expansion rules of regex crates:
// `$$` is an escaped dollar, unbraced name is the longest `[_0-9a-zA-Z]` run.
fn group_references(replacement: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut rest = replacement;
    while let Some(position) = rest.find('$') {
        rest = &rest[position + 1..];
        if let Some(after) = rest.strip_prefix('$') {
            rest = after;
        } else if let Some(braced) = rest.strip_prefix('{') {
            let Some(end) = braced.find('}') else {
                break;
            };
            result.push(&braced[..end]);
            rest = &braced[end + 1..];
        } else {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            if end > 0 {
                result.push(&rest[..end]);
            }
            rest = &rest[end..];
        }
    }
    result
}

/// Ordered list of replacements.
#[derive(Clone, Debug)]
pub struct ReplacementTable {
    replacements: Vec<Replacement>,
}

impl Default for ReplacementTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_REPLACEMENTS.iter().copied())
            .expect("default replacement patterns should compile")
    }
}

impl ReplacementTable {
    /// Table without any replacement, only keywords are escaped.
    pub fn empty() -> Self {
        Self {
            replacements: Vec::new(),
        }
    }

    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let mut table = Self::empty();
        for (pattern, replacement) in pairs {
            table.push(pattern.as_ref(), replacement)?;
        }
        Ok(table)
    }

    /// Append replacement at the end of the table.
    pub fn push(&mut self, pattern: &str, replacement: impl Into<String>) -> Result<()> {
        self.replacements
            .push(Replacement::new(pattern, replacement)?);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replacement> {
        self.replacements.iter()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Escape class name into a field name.
    pub fn escape(&self, name: &str) -> String {
        let mut escaped = name.to_owned();
        for replacement in &self.replacements {
            escaped = replacement.apply(&escaped).into_owned();
        }
        // Check keywords only after all replacements,
        // table can produce a keyword from a valid class name.
        if is_reserved(&escaped) {
            escaped.push_str(RESERVED_SUFFIX);
        }
        escaped
    }
}

/// Escape class name into a field name, see [`ReplacementTable::escape`].
pub fn escape(name: &str, table: &ReplacementTable) -> String {
    table.escape(name)
}

/// Escape every record, keeping input order.
pub fn escape_classes<'a>(
    records: &'a [ClassRecord],
    table: &ReplacementTable,
) -> Vec<EscapedClass<'a>> {
    records
        .iter()
        .map(|record| {
            let class = EscapedClass::new(record, table);
            if class.escaped_name() != class.name() {
                log::debug!("Escaped class `{}` as `{}`", class.name(), class.escaped_name());
            }
            class
        })
        .collect()
}
