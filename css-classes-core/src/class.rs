use crate::ReplacementTable;

/// One css rule that uses a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOccurrence {
    /// Raw property text, like `max-width: 576px`.
    pub property: String,
    /// Media query that wraps the rule, like `@media (min-width: 576px)`.
    pub media_query: Option<String>,
}

impl ClassOccurrence {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            media_query: None,
        }
    }

    pub fn with_media_query(property: impl Into<String>, media_query: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            media_query: Some(media_query.into()),
        }
    }

    /// Returns media query if it is set and not empty.
    pub fn media_query(&self) -> Option<&str> {
        self.media_query.as_deref().filter(|m| !m.is_empty())
    }
}

/// Class found in the project sources.
///
/// Names are expected to be unique in a list of records,
/// collector is responsible for deduplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub properties: Vec<ClassOccurrence>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_properties(name, Vec::new())
    }

    pub fn with_properties(name: impl Into<String>, properties: Vec<ClassOccurrence>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    pub fn push(&mut self, occurrence: ClassOccurrence) {
        self.properties.push(occurrence);
    }
}

/// Class record together with its field name.
///
/// Can only be created by escaping, so the emitter never sees a class
/// without a field name.
#[derive(Clone, Debug)]
pub struct EscapedClass<'a> {
    record: &'a ClassRecord,
    escaped_name: String,
}

impl<'a> EscapedClass<'a> {
    pub fn new(record: &'a ClassRecord, table: &ReplacementTable) -> Self {
        Self {
            escaped_name: table.escape(&record.name),
            record,
        }
    }

    /// Original class name, as used in css.
    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    /// Name of the struct field.
    pub fn escaped_name(&self) -> &str {
        &self.escaped_name
    }

    pub fn properties(&self) -> &'a [ClassOccurrence] {
        &self.record.properties
    }

    pub fn record(&self) -> &'a ClassRecord {
        self.record
    }
}
