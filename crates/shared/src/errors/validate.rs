use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens `validator` output into `field: message` lines, descending into
/// nested structs and lists.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut result = Vec::new();
    collect("", errors, &mut result);

    if result.is_empty() {
        result.push("Validation failed".to_string());
    }
    result.sort();
    result
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match &*err.code {
                            "length" => "invalid length".to_string(),
                            "range" => "value out of range".to_string(),
                            "required" => "required".to_string(),
                            _ => "invalid value".to_string(),
                        });
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}
