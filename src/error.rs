use crate::{field::Field, utils};
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Expression has fewer than five non-empty fields, so it isn't ready to be validated.
    #[error("incomplete cron expression: {0}")]
    IncompleteExpression(String),
    /// Expression has more than five fields.
    #[error("too many fields in cron expression: {0}")]
    TooManyFields(String),
    /// At least one field of the expression has an invalid value.
    #[error("invalid cron expression '{pattern}': {}", join_errors(.errors))]
    InvalidExpression {
        /// Expression as it was provided.
        pattern: String,
        /// One error per each invalid field, in field order.
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Field-scoped description of an invalid value, ready to be shown to a user as is.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{title} {description}")]
pub struct ValidationError {
    field: Field,
    title: String,
    description: String,
}

impl ValidationError {
    /// Rejects `value` and lists what the field accepts instead.
    pub(crate) fn new(field: Field, value: &str, accepted: &str) -> Self {
        Self {
            field,
            title: title(field),
            description: format!("Expression '{value}' is not a valid value. Accepted values are [{accepted}]"),
        }
    }

    /// Number is outside of the field's domain.
    pub(crate) fn out_of_domain(field: Field, value: &str) -> Self {
        let domain = field.domain();
        Self::new(field, value, &format!("{}-{}", domain.start(), domain.end()))
    }

    /// Single character isn't one of the field's symbols.
    pub(crate) fn invalid_symbol(field: Field, value: &str) -> Self {
        let symbols = field.single_symbols().iter().map(char::to_string).collect::<Vec<_>>();
        Self::new(field, value, &symbols.join(", "))
    }

    /// Word isn't one of the field's short names.
    ///
    /// Fields without names fall back to the domain description.
    pub(crate) fn invalid_name(field: Field, value: &str, names: Option<&[&str]>) -> Self {
        match names {
            Some(names) => Self::new(field, value, &names.join(", ")),
            None => Self::out_of_domain(field, value),
        }
    }

    /// Rejects `value` with a free-text explanation.
    pub(crate) fn with_message(field: Field, value: &str, message: &str) -> Self {
        Self {
            field,
            title: title(field),
            description: format!("Expression '{value}' is not a valid value. {message}"),
        }
    }

    /// Field which has the invalid value.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Parenthesized field name, i.e. `(Day Of The Month)`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Message which refers the offending value and the accepted ones.
    pub fn description(&self) -> &str {
        &self.description
    }
}

fn title(field: Field) -> String {
    format!("({})", utils::title_case(field.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::Minute, "(Minute)")]
    #[case(Field::Hour, "(Hour)")]
    #[case(Field::DayOfMonth, "(Day Of The Month)")]
    #[case(Field::Month, "(Month)")]
    #[case(Field::DayOfWeek, "(Day Of The Week)")]
    fn test_title(#[case] field: Field, #[case] expected: &str) {
        assert_eq!(ValidationError::new(field, "x", "y").title(), expected);
        assert_eq!(ValidationError::with_message(field, "x", "y").title(), expected);
    }

    #[test]
    fn test_accepted_values_description() {
        let error = ValidationError::new(Field::Hour, "24", "0-23");
        assert_eq!(error.field(), Field::Hour);
        assert_eq!(
            error.description(),
            "Expression '24' is not a valid value. Accepted values are [0-23]"
        );
        assert_eq!(
            error.to_string(),
            "(Hour) Expression '24' is not a valid value. Accepted values are [0-23]"
        );
    }

    #[rstest]
    #[case(Field::Minute, "60", "Accepted values are [0-59]")]
    #[case(Field::DayOfMonth, "0", "Accepted values are [1-31]")]
    #[case(Field::DayOfWeek, "-1", "Accepted values are [0-6]")]
    fn test_out_of_domain(#[case] field: Field, #[case] value: &str, #[case] expected: &str) {
        let error = ValidationError::out_of_domain(field, value);
        assert!(error.description().ends_with(expected), "error = {error}");
    }

    #[rstest]
    #[case(Field::Minute, "Accepted values are [*]")]
    #[case(Field::DayOfMonth, "Accepted values are [*, ?, L, W]")]
    #[case(Field::DayOfWeek, "Accepted values are [*, ?, L, #]")]
    fn test_invalid_symbol(#[case] field: Field, #[case] expected: &str) {
        let error = ValidationError::invalid_symbol(field, "X");
        assert!(error.description().ends_with(expected), "error = {error}");
    }

    #[test]
    fn test_invalid_name() {
        let error = ValidationError::invalid_name(Field::DayOfWeek, "MONDAY", Field::DayOfWeek.short_symbols());
        assert_eq!(
            error.description(),
            "Expression 'MONDAY' is not a valid value. Accepted values are [SUN, MON, TUE, WED, THU, FRI, SAT]"
        );

        let error = ValidationError::invalid_name(Field::Hour, "noon", None);
        assert_eq!(
            error.description(),
            "Expression 'noon' is not a valid value. Accepted values are [0-23]"
        );
    }

    #[test]
    fn test_custom_message_description() {
        let error = ValidationError::with_message(
            Field::Minute,
            "1-2-3",
            "You need to provide exactly two values around the '-' separator.",
        );
        assert_eq!(
            error.description(),
            "Expression '1-2-3' is not a valid value. You need to provide exactly two values around the '-' separator."
        );
    }

    #[test]
    fn test_invalid_expression_display() {
        let error = Error::InvalidExpression {
            pattern: "60 24 * * *".to_owned(),
            errors: vec![
                ValidationError::new(Field::Minute, "60", "0-59"),
                ValidationError::new(Field::Hour, "24", "0-23"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "invalid cron expression '60 24 * * *': \
             (Minute) Expression '60' is not a valid value. Accepted values are [0-59]; \
             (Hour) Expression '24' is not a valid value. Accepted values are [0-23]"
        );
    }

    #[test]
    fn test_incomplete_expression_display() {
        assert_eq!(
            Error::IncompleteExpression("* *".to_owned()).to_string(),
            "incomplete cron expression: * *"
        );
        assert_eq!(
            Error::TooManyFields("* * * * * *".to_owned()).to_string(),
            "too many fields in cron expression: * * * * * *"
        );
    }
}
