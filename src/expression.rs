use crate::{describe::Interpreter, field::Field, symbols::SymbolTables, validator, Error, Result};
use std::{fmt::Display, str::FromStr};

/// Number of fields in a complete expression.
pub const FIELDS: usize = 5;

/// Splits expression into raw field values.
///
/// Any whitespace run separates fields, leading and trailing whitespace is ignored.
pub fn split(pattern: &str) -> Vec<&str> {
    pattern.split_whitespace().collect()
}

/// Raw value of the `field` in the expression, if the expression has it.
pub fn field_token(pattern: &str, field: Field) -> Option<&str> {
    pattern.split_whitespace().nth(field.position())
}

/// Splits expression into exactly [`FIELDS`] values.
pub(crate) fn split_fields(pattern: &str) -> Result<[&str; FIELDS]> {
    <[&str; FIELDS]>::try_from(split(pattern)).map_err(|tokens| {
        if tokens.len() < FIELDS {
            Error::IncompleteExpression(pattern.to_owned())
        } else {
            Error::TooManyFields(pattern.to_owned())
        }
    })
}

/// Represents validated cron expression.
///
/// For the expression syntax and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Expression {
    fields: [String; FIELDS],
}

impl Expression {
    /// Splits and validates provided `pattern` and constructs [`Expression`] instance.
    ///
    /// Alternative way to construct [`Expression`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`Error`] in a case provided pattern doesn't have five fields or any of the fields is invalid.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        Self::new_with(pattern, SymbolTables::english())
    }

    /// Same as [`Expression::new`], but named values are looked up in `symbols`.
    pub fn new_with(pattern: impl Into<String>, symbols: &SymbolTables<'_>) -> Result<Self> {
        let pattern = pattern.into();
        let errors = validator::validate_with(&pattern, symbols)?;
        if !errors.is_empty() {
            return Err(Error::InvalidExpression { pattern, errors });
        }

        let fields = split_fields(&pattern)?.map(str::to_owned);
        Ok(Self { fields })
    }

    /// Raw value of the field, as it was written.
    pub fn token(&self, field: Field) -> &str {
        &self.fields[field.position()]
    }

    /// Describes expression as an English sentence.
    pub fn describe(&self) -> String {
        self.describe_with(SymbolTables::english())
    }

    /// Describes expression using names from `symbols`.
    ///
    /// Should be called with the same tables the expression was constructed with,
    /// otherwise named values are rendered as they were written.
    pub fn describe_with(&self, symbols: &SymbolTables<'_>) -> String {
        Interpreter::new(symbols).translate(&self.fields.each_ref().map(String::as_str))
    }
}

impl From<Expression> for String {
    fn from(value: Expression) -> Self {
        value.to_string()
    }
}

impl From<&Expression> for String {
    fn from(value: &Expression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Expression {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Expression {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Expression {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}
