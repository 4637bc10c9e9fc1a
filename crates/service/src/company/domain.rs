use models::company::NewCompany;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Body accepted by `POST /companies`. Both fields are free text and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCompanyInput {
    pub name: Option<String>,
    pub founder: Option<String>,
}

impl From<CreateCompanyInput> for NewCompany {
    fn from(input: CreateCompanyInput) -> Self {
        NewCompany::new(input.name, input.founder)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Parse a raw create body. Anything other than a JSON object with optional
/// string fields is a `ServiceError::Validation`.
pub fn parse_create_body(content_type: Option<&str>, body: &[u8]) -> Result<CreateCompanyInput, ServiceError> {
    match content_type {
        Some(ct) if is_json_content_type(ct) => {}
        Some(ct) => return Err(ServiceError::Validation(format!("unsupported content type: {ct}"))),
        None => return Err(ServiceError::Validation("missing content type".into())),
    }
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ServiceError::Validation(format!("malformed JSON: {e}")))?;
    if !value.is_object() {
        return Err(ServiceError::Validation("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| ServiceError::Validation(format!("invalid field: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn parses_both_fields() {
        let input = parse_create_body(JSON, br#"{"name":"Acme","founder":"Jane Doe"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Acme"));
        assert_eq!(input.founder.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn absent_and_null_fields_become_none() {
        let input = parse_create_body(JSON, br#"{"founder":null}"#).unwrap();
        assert_eq!(input, CreateCompanyInput::default());
    }

    #[test]
    fn unknown_fields_ignored() {
        let input = parse_create_body(JSON, br#"{"name":"A","extra":1}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("A"));
    }

    #[test]
    fn content_type_parameters_accepted() {
        assert!(parse_create_body(Some("application/json; charset=utf-8"), b"{}").is_ok());
        assert!(parse_create_body(Some("application/merge-patch+json"), b"{}").is_ok());
    }

    #[test]
    fn rejects_non_json_content_type() {
        let err = parse_create_body(Some("text/plain"), b"{}").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = parse_create_body(None, b"{}").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        for body in [&b""[..], b"{", b"not json"] {
            let err = parse_create_body(JSON, body).unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
    }

    #[test]
    fn rejects_non_objects() {
        for body in [&br#"["Acme","Jane"]"#[..], b"\"Acme\"", b"42", b"null"] {
            let err = parse_create_body(JSON, body).unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "{:?}", std::str::from_utf8(body));
        }
    }

    #[test]
    fn rejects_wrong_field_types() {
        let err = parse_create_body(JSON, br#"{"name":5}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn converts_into_new_company_without_date() {
        let new: NewCompany = CreateCompanyInput { name: Some("A".into()), founder: None }.into();
        assert_eq!(new.name.as_deref(), Some("A"));
        assert!(new.founding_date.is_none());
    }
}
