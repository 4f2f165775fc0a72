use crate::{
    field::{Field, PatternValueType, Separator},
    symbols::SymbolTables,
    utils,
};

/// Syntactic shape of a field value.
///
/// Validator and describer both rely on [`Token::classify`],
/// so they always agree on how a value is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Token<'a> {
    /// Whole value is a number, i.e. `5` or `-1`.
    Integer(PatternValueType),
    /// Single character, i.e. `*` or `L`.
    Single(char),
    /// Word without separators, i.e. `MON`.
    Named(&'a str),
    /// Numbers or names only, i.e. `1,5` or `MON,FRI`.
    List(Vec<&'a str>),
    /// List with at least one item of another shape, i.e. `1,5-10,*/15`.
    ComplexList(Vec<&'a str>),
    // low-high
    Range(&'a str, &'a str),
    // start/interval
    Step(&'a str, &'a str),
    // weekday#occurrence
    Nth(&'a str, &'a str),
    /// Separator without the values it needs, i.e. `1-2-3`, `*/` or a lone `#`.
    Malformed(Separator),
}

impl<'a> Token<'a> {
    /// Classifies raw field value.
    ///
    /// Order matters: numbers first, then single characters, then separators
    /// in the field's order (list, range, step, nth), and words last.
    /// Empty segments around separators are dropped.
    pub(crate) fn classify(field: Field, input: &'a str) -> Self {
        if let Some(value) = utils::parse_digital_value(input) {
            return Self::Integer(value);
        }

        let mut chars = input.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match field.separator_of(c) {
                Some(separator) => Self::Malformed(separator),
                None => Self::Single(c),
            };
        }

        let separator = field
            .separators()
            .iter()
            .copied()
            .find(|separator| input.contains(separator.as_char()));

        let Some(separator) = separator else {
            return Self::Named(input);
        };

        let parts = input
            .split(separator.as_char())
            .filter(|part| !part.is_empty())
            .collect::<Vec<&'a str>>();

        if separator == Separator::List {
            if parts.is_empty() {
                return Self::Malformed(separator);
            }

            let is_complex = parts
                .iter()
                .any(|&part| !matches!(Token::classify(field, part), Token::Integer(_) | Token::Named(_)));

            return if is_complex {
                Self::ComplexList(parts)
            } else {
                Self::List(parts)
            };
        }

        match (separator, parts.as_slice()) {
            (Separator::Range, &[low, high]) => Self::Range(low, high),
            (Separator::Step, &[start, interval]) => Self::Step(start, interval),
            (Separator::Nth, &[weekday, occurrence]) => Self::Nth(weekday, occurrence),
            _ => Self::Malformed(separator),
        }
    }
}

/// Numeric value of a number or a short name, i.e. `5` or `MAY`.
pub(crate) fn numeric_value(field: Field, input: &str, symbols: &SymbolTables<'_>) -> Option<PatternValueType> {
    match Token::classify(field, input) {
        Token::Integer(value) => Some(value),
        Token::Named(name) => symbols.value_of(field, name),
        _ => None,
    }
}
