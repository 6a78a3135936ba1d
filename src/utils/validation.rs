use validator::Validate;

use super::form::Lenient;
use crate::interceptors::ValidationErrors;

/// Run `validator` rules, collecting failures per field
pub fn collect_errors<T: Validate>(request: &T) -> ValidationErrors {
    let mut collected = ValidationErrors::new();

    if let Err(e) = request.validate() {
        for (field, errors) in e.field_errors() {
            for error in errors {
                let message = error.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| {
                    format!("The {} field is invalid.", field.replace('_', " "))
                });
                collected.add(field.to_string(), message);
            }
        }
    }

    collected
}

/// Record a "required" failure when `value` is absent
pub fn require<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, format!("The {} field is required.", field.replace('_', " ")));
    }
    value
}

/// Unwrap a loosely typed input, recording "must be {kind}" when it did not parse
pub fn parsed<T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Lenient<T>>,
    kind: &str,
) -> Option<T> {
    match value? {
        Lenient::Parsed(value) => Some(value),
        Lenient::Invalid(_) => {
            errors.add(field, format!("The {} field must be {}.", field.replace('_', " "), kind));
            None
        }
    }
}

/// [`require`] followed by [`parsed`]
pub fn require_parsed<T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Lenient<T>>,
    kind: &str,
) -> Option<T> {
    let value = require(errors, field, value);
    parsed(errors, field, value, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_reported_under_its_field() {
        let mut errors = ValidationErrors::new();

        let duration = require_parsed::<i32>(
            &mut errors,
            "duration",
            Some(Lenient::Invalid("thirty".to_string())),
            "an integer",
        );
        let price = require_parsed::<i32>(&mut errors, "price", None, "a number");
        let flag = parsed(&mut errors, "is_active", Some(Lenient::Parsed(true)), "true or false");

        assert_eq!(duration, None);
        assert_eq!(price, None);
        assert_eq!(flag, Some(true));
        assert_eq!(errors.messages("duration"), ["The duration field must be an integer."]);
        assert_eq!(errors.messages("price"), ["The price field is required."]);
        assert!(!errors.has("is_active"));
    }
}
