//! Validation helpers shared by request extractors

use validator::{ValidationErrors, ValidationErrorsKind};

/// First failing field and its message, walking nested structs depth-first
///
/// Field names are joined with `.` for nested errors (`inputs.ph`).
pub fn first_validation_error(errors: &ValidationErrors) -> (String, String) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(name, _)| **name);

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(err) = list.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                    return (field.to_string(), message);
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                let (nested, message) = first_validation_error(inner);
                return (format!("{}.{}", field, nested), message);
            }
            ValidationErrorsKind::List(items) => {
                if let Some((index, inner)) = items.iter().next() {
                    let (nested, message) = first_validation_error(inner);
                    return (format!("{}[{}].{}", field, index, nested), message);
                }
            }
        }
    }

    ("request".to_string(), "Invalid request".to_string())
}
