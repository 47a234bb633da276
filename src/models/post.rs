use crate::Error;
use serde_json::{Map, Value};

/// A single social-media post record, kept exactly as parsed.
///
/// Only `text` and `lang` are read by the pipeline; any other fields (ids, timestamps, user
/// info) are retained but ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    index: usize,
    fields: Map<String, Value>,
}

impl Post {
    pub fn new(index: usize, fields: Map<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Position of the record within its source array.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn lang(&self) -> Result<&str, Error> {
        self.get_str_field("lang")
    }

    pub fn text(&self) -> Result<&str, Error> {
        self.get_str_field("text")
    }

    fn get_str_field(&self, field: &str) -> Result<&str, Error> {
        match self.fields.get(field) {
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(Error::SchemaError(format!(
                "Record {} has a non-string '{}' field: {}",
                self.index, field, other
            ))),
            None => Err(Error::SchemaError(format!(
                "Record {} is missing the '{}' field",
                self.index, field
            ))),
        }
    }
}
