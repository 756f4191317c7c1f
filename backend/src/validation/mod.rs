//! JSON Schema validation for public forms.
//!
//! Form payloads are checked against Draft 7 schemas embedded at compile
//! time from the `schemas/` directory:
//!
//! - `lead-draft.json` - lead wizard submission
//! - `vendor-registration.json` - supplier application
//! - `signup.json` - storefront account registration
//!
//! Required text fields use `"pattern": "\\S"` so whitespace-only input is
//! rejected the same way as a missing field.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use bantconfirm::validation::{validate_form, FormSchema};
//!
//! let draft = json!({ "name": "Rahul", "email": "r@x.in", "mobile": "98", "need": "CRM" });
//! assert!(validate_form(FormSchema::LeadDraft, &draft).is_ok());
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;

/// Forms that carry an embedded schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSchema {
    LeadDraft,
    VendorRegistration,
    Signup,
}

impl FormSchema {
    fn source(&self) -> &'static str {
        match self {
            Self::LeadDraft => include_str!("../../schemas/lead-draft.json"),
            Self::VendorRegistration => include_str!("../../schemas/vendor-registration.json"),
            Self::Signup => include_str!("../../schemas/signup.json"),
        }
    }

    /// Parsed schema document
    pub fn schema(&self) -> Result<Value, ValidationError> {
        serde_json::from_str(self.source()).map_err(|e| ValidationError::SchemaError {
            errors: vec![format!("Embedded schema {:?} is invalid: {}", self, e)],
        })
    }
}

/// Validate `data` against `schema`.
///
/// Returns every violation message when invalid.
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator =
        jsonschema::draft7::new(schema).map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Boolean shortcut for [`validate`].
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    jsonschema::draft7::is_valid(schema, data)
}

/// Validate a typed form against its embedded schema.
pub fn validate_form<T: Serialize>(form: FormSchema, data: &T) -> Result<(), ValidationError> {
    let schema = form.schema()?;
    let value = serde_json::to_value(data).map_err(|e| ValidationError::InvalidValue {
        field: format!("{:?}", form),
        message: e.to_string(),
    })?;

    validate(&schema, &value).map_err(|errors| {
        debug!(?form, ?errors, "form rejected");
        ValidationError::SchemaError { errors }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_schemas_parse() {
        for form in [FormSchema::LeadDraft, FormSchema::VendorRegistration, FormSchema::Signup] {
            let schema = form.schema().unwrap();
            assert!(schema.get("required").is_some());
        }
    }

    #[test]
    fn test_lead_draft_requires_contact_and_need() {
        let ok = json!({ "name": "Rahul", "email": "rahul@company.in", "mobile": "9876543210", "need": "CRM for 20 users" });
        assert!(validate_form(FormSchema::LeadDraft, &ok).is_ok());

        let missing = json!({ "name": "Rahul", "email": "rahul@company.in", "mobile": "9876543210" });
        assert!(validate_form(FormSchema::LeadDraft, &missing).is_err());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let blank = json!({ "name": "   ", "email": "a@b.in", "mobile": "1", "need": "x" });
        let err = validate_form(FormSchema::LeadDraft, &blank).unwrap_err();
        assert!(matches!(err, ValidationError::SchemaError { ref errors } if !errors.is_empty()));
    }

    #[test]
    fn test_vendor_email_shape() {
        let mut form = json!({
            "name": "Amit",
            "companyName": "Nexus",
            "mobile": "98",
            "email": "amit@nexus.com",
            "location": "Noida",
            "productExpertise": "CRM"
        });
        assert!(validate_form(FormSchema::VendorRegistration, &form).is_ok());

        form["email"] = json!("not-an-email");
        assert!(validate_form(FormSchema::VendorRegistration, &form).is_err());
    }

    #[test]
    fn test_generic_validate_collects_errors() {
        let schema = json!({
            "type": "object",
            "required": ["a", "b"]
        });
        let errors = validate(&schema, &json!({})).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(!is_valid(&schema, &json!({ "a": 1 })));
    }
}
