use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;

/// A stored JSON document: an assigned identifier plus an arbitrary payload.
///
/// The payload is any well-formed JSON value; `Value::Null` is only legal
/// nested inside a structure, never as the payload itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    /// Wrap a payload in a document with no identifier yet; storage assigns one.
    pub fn new(data: Value) -> Self {
        Self {
            id: String::new(),
            data,
        }
    }

    /// A document must carry a non-null payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.data.is_null() {
            return Err(DomainError::InvalidData);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_document_has_empty_id() {
        let doc = Document::new(json!({"a": 1}));
        assert!(doc.id.is_empty());
        assert_eq!(doc.data, json!({"a": 1}));
    }

    #[test]
    fn null_payload_is_invalid() {
        let doc = Document::new(Value::Null);
        assert_eq!(doc.validate(), Err(DomainError::InvalidData));
    }

    #[test]
    fn non_null_payloads_are_valid() {
        for data in [json!({}), json!([]), json!("s"), json!(0), json!(false)] {
            assert!(Document::new(data).validate().is_ok());
        }
        // null is allowed when nested inside a structure
        assert!(Document::new(json!({"inner": null})).validate().is_ok());
    }
}
