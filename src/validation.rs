use actix_web::{HttpRequest, error::InternalError};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// One field-level validation issue, reported in the `errors` array of a
/// 400 response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "email is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn require_non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

pub fn require_email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    } else if !value.contains('@') {
        errors.push(FieldError::new(field, format!("{field} must be an email address")));
    }
}

pub fn require_positive(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if value <= 0.0 {
        errors.push(FieldError::new(field, format!("{field} must be positive")));
    }
}

pub fn require_range(errors: &mut Vec<FieldError>, field: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.push(FieldError::new(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
}

/// Pulls the offending field out of serde's detail message. Only
/// "missing field `x`" and "unknown field `x`" name a field; everything
/// else (syntax errors, type mismatches) is attributed to the body.
fn field_from_detail(detail: &str) -> &str {
    for marker in ["missing field `", "unknown field `"] {
        if let Some(rest) = detail.split(marker).nth(1) {
            if let Some(name) = rest.split('`').next() {
                if !name.is_empty() {
                    return name;
                }
            }
        }
    }
    "body"
}

/// Rewrites actix's JSON deserialization failures into the API's
/// `{ message, errors }` error body, so a payload that omits a required
/// field reports that field the same way `validate()` would.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    let body = json!({
        "message": "Invalid request body",
        "errors": [ { "field": field_from_detail(&detail), "message": detail } ],
    });
    InternalError::from_response(err, actix_web::HttpResponse::BadRequest().json(body)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_flagged() {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", "  ");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn email_without_at_is_flagged() {
        let mut errors = Vec::new();
        require_email(&mut errors, "email", "not-an-email");
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn missing_field_detail_names_the_field() {
        assert_eq!(
            field_from_detail("Json deserialize error: missing field `email` at line 1 column 140"),
            "email"
        );
        assert_eq!(
            field_from_detail("Json deserialize error: unknown field `nickname`, expected one of ..."),
            "nickname"
        );
    }

    #[test]
    fn unattributable_detail_falls_back_to_body() {
        assert_eq!(field_from_detail("expected value at line 1 column 2"), "body");
        assert_eq!(
            field_from_detail("invalid type: integer `5`, expected a string at line 1 column 20"),
            "body"
        );
    }

    #[test]
    fn valid_values_pass() {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", "ok");
        require_email(&mut errors, "email", "a@b.com");
        require_positive(&mut errors, "amount", 10.0);
        require_range(&mut errors, "progress", 50, 0, 100);
        assert!(errors.is_empty());
    }
}
