//! # Props Schemas
//!
//! A schema accepts an arbitrary [`Value`] and either returns the coerced
//! props or a [`SchemaError`]. The only way to obtain [`ValidatedProps`] is
//! through a successful check, so code holding one knows validation
//! happened; a raw `SectionConfig::props` is still a draft.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use storefront_props::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("props do not match schema: {0}")]
    Mismatch(String),

    #[error("expected props to be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("validated props could not be re-encoded: {0}")]
    Encode(String),
}

/// Validator for one section type's props
pub trait PropsSchema: Send + Sync {
    /// Check `value`, returning the coerced props on success
    fn validate(&self, value: &Value) -> Result<Value, SchemaError>;
}

/// Schema backed by a serde type.
///
/// Validation deserializes into `T` and serializes back, so serde attributes
/// on `T` (`#[serde(default)]`, renames, enums) define both the accepted
/// shape and the coercions applied.
pub struct TypedSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PropsSchema for TypedSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    fn validate(&self, value: &Value) -> Result<Value, SchemaError> {
        let typed: T = serde_json::from_value(value.to_json())
            .map_err(|e| SchemaError::Mismatch(e.to_string()))?;
        serde_json::to_value(&typed)
            .map(Value::from)
            .map_err(|e| SchemaError::Encode(e.to_string()))
    }
}

/// Accepts any object unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenSchema;

impl PropsSchema for OpenSchema {
    fn validate(&self, value: &Value) -> Result<Value, SchemaError> {
        match value {
            Value::Object(_) => Ok(value.clone()),
            other => Err(SchemaError::NotAnObject(other.kind())),
        }
    }
}

/// Props that passed their section's schema
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProps {
    section_type: String,
    value: Value,
}

impl ValidatedProps {
    pub(crate) fn new(section_type: impl Into<String>, value: Value) -> Self {
        Self {
            section_type: section_type.into(),
            value,
        }
    }

    pub fn section_type(&self) -> &str {
        &self.section_type
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Typed view for renderers that know their props struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, SchemaError> {
        serde_json::from_value(self.value.to_json()).map_err(|e| SchemaError::Mismatch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct CardProps {
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        columns: u8,
    }

    #[test]
    fn test_typed_schema_fills_defaults() {
        let schema = TypedSchema::<CardProps>::new();
        let out = schema.validate(&Value::from(json!({ "title": "Hi" }))).unwrap();
        assert_eq!(out.to_json(), json!({ "title": "Hi", "subtitle": "", "columns": 0 }));
    }

    #[test]
    fn test_typed_schema_rejects_wrong_types() {
        let schema = TypedSchema::<CardProps>::new();
        let err = schema
            .validate(&Value::from(json!({ "title": 3 })))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Mismatch(_)));

        let err = schema.validate(&Value::from(json!({}))).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_open_schema() {
        assert!(OpenSchema.validate(&Value::object()).is_ok());
        assert_eq!(
            OpenSchema.validate(&Value::from("text")),
            Err(SchemaError::NotAnObject("string"))
        );
    }

    #[test]
    fn test_validated_props_typed_view() {
        let props = ValidatedProps::new("card", Value::from(json!({ "title": "A" })));
        let card: CardProps = props.deserialize().unwrap();
        assert_eq!(card.title, "A");
        assert_eq!(props.section_type(), "card");
    }
}
