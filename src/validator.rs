use crate::{
    error::ValidationError,
    expression,
    field::{Field, PatternValueType, Separator},
    pattern::Token,
    symbols::SymbolTables,
    utils, Result,
};
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// Valid numbers after the `#` separator.
const OCCURRENCES: RangeInclusive<PatternValueType> = 1..=5;

/// Validates single field value.
///
/// Returns the first problem found inside the value, or `None` if the whole value is valid.
pub fn validate_field(field: Field, token: &str) -> Option<ValidationError> {
    validate_field_with(field, token, SymbolTables::english())
}

/// Validates single field value, with named values looked up in `symbols`.
pub fn validate_field_with(field: Field, token: &str, symbols: &SymbolTables<'_>) -> Option<ValidationError> {
    let result = check(field, token, symbols).err();
    if let Some(error) = &result {
        trace!(%field, token, %error, "invalid field value");
    }
    result
}

/// Validates all fields of the expression.
///
/// Returns one error per invalid field, in field order; an empty list means the expression is valid.
/// Fails with [`Error::IncompleteExpression`](crate::Error::IncompleteExpression) or
/// [`Error::TooManyFields`](crate::Error::TooManyFields) if the expression doesn't have exactly five fields:
/// such an expression isn't ready to be validated.
pub fn validate(pattern: &str) -> Result<Vec<ValidationError>> {
    validate_with(pattern, SymbolTables::english())
}

/// Validates all fields of the expression, with named values looked up in `symbols`.
pub fn validate_with(pattern: &str, symbols: &SymbolTables<'_>) -> Result<Vec<ValidationError>> {
    let tokens = expression::split_fields(pattern)?;
    let errors = Field::ALL
        .iter()
        .zip(tokens)
        .filter_map(|(field, token)| validate_field_with(*field, token, symbols))
        .collect::<Vec<_>>();

    debug!(pattern, errors = errors.len(), "validated cron expression");
    Ok(errors)
}

/// Recursive descent over the value, the first error wins.
fn check(field: Field, input: &str, symbols: &SymbolTables<'_>) -> Result<(), ValidationError> {
    match Token::classify(field, input) {
        Token::Integer(value) => {
            if field.domain().contains(&value) {
                Ok(())
            } else {
                Err(ValidationError::out_of_domain(field, input))
            }
        }
        Token::Single(symbol) => {
            if field.single_symbols().contains(&symbol) {
                Ok(())
            } else {
                Err(ValidationError::invalid_symbol(field, input))
            }
        }
        Token::Named(name) => {
            if symbols.value_of(field, name).is_some() {
                Ok(())
            } else {
                Err(ValidationError::invalid_name(field, input, symbols.short(field)))
            }
        }
        Token::List(items) | Token::ComplexList(items) => {
            items.iter().try_for_each(|item| check(field, item, symbols))
        }
        Token::Range(first, second) | Token::Step(first, second) => {
            check(field, first, symbols)?;
            check(field, second, symbols)
        }
        Token::Nth(weekday, occurrence) => {
            check(field, weekday, symbols)?;
            match utils::parse_digital_value(occurrence) {
                Some(value) if OCCURRENCES.contains(&value) => Ok(()),
                _ => Err(ValidationError::with_message(
                    field,
                    occurrence,
                    &format!(
                        "The occurrence after '{}' must be a number from {} to {}.",
                        Separator::Nth,
                        OCCURRENCES.start(),
                        OCCURRENCES.end()
                    ),
                )),
            }
        }
        Token::Malformed(Separator::List) => Err(ValidationError::with_message(
            field,
            input,
            "You need to provide at least one value in the list.",
        )),
        Token::Malformed(separator) => Err(ValidationError::with_message(
            field,
            input,
            &format!("You need to provide exactly two values around the '{separator}' separator."),
        )),
    }
}
