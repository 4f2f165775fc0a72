use crate::symbols::SymbolTables;
use std::{fmt::Display, ops::RangeInclusive};

pub(crate) type PatternValueType = i64;

/// Wildcard symbol, valid alone in every field.
pub(crate) const WILDCARD: char = '*';

/// Character with grammatical meaning inside a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Separator {
    /// List of values or patterns, i.e. `1,7,12`.
    List,
    /// Range of values, i.e. `0-15`.
    Range,
    /// Repeating values, i.e. `*/12`.
    Step,
    /// N-th weekday of the month, i.e. `2#1`.
    Nth,
}

impl Separator {
    /// Returns the character which stands for the separator.
    pub const fn as_char(&self) -> char {
        match self {
            Self::List => ',',
            Self::Range => '-',
            Self::Step => '/',
            Self::Nth => '#',
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which of the symbol tables applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SymbolKind {
    Months,
    Weekdays,
}

/// Static metadata of a single field.
#[derive(Debug)]
pub(crate) struct FieldSpec {
    pub(crate) position: usize,
    pub(crate) display_name: &'static str,
    pub(crate) display_name_plural: &'static str,
    pub(crate) prefix: &'static str,
    pub(crate) domain: RangeInclusive<PatternValueType>,
    pub(crate) single_symbols: &'static [char],
    pub(crate) separators: &'static [Separator],
    pub(crate) symbols: Option<SymbolKind>,
}

const COMMON_SEPARATORS: &[Separator] = &[Separator::List, Separator::Range, Separator::Step];
const WEEKDAY_SEPARATORS: &[Separator] = &[Separator::List, Separator::Range, Separator::Step, Separator::Nth];

// Indexed by `Field as usize`.
static REGISTRY: [FieldSpec; 5] = [
    FieldSpec {
        position: 0,
        display_name: "minute",
        display_name_plural: "minutes",
        prefix: "at",
        domain: 0..=59,
        single_symbols: &[WILDCARD],
        separators: COMMON_SEPARATORS,
        symbols: None,
    },
    FieldSpec {
        position: 1,
        display_name: "hour",
        display_name_plural: "hours",
        prefix: "past",
        domain: 0..=23,
        single_symbols: &[WILDCARD],
        separators: COMMON_SEPARATORS,
        symbols: None,
    },
    FieldSpec {
        position: 2,
        display_name: "day of the month",
        display_name_plural: "days of the month",
        prefix: "on",
        domain: 1..=31,
        single_symbols: &[WILDCARD, '?', 'L', 'W'],
        separators: COMMON_SEPARATORS,
        symbols: None,
    },
    FieldSpec {
        position: 3,
        display_name: "month",
        display_name_plural: "months",
        prefix: "in",
        domain: 1..=12,
        single_symbols: &[WILDCARD],
        separators: COMMON_SEPARATORS,
        symbols: Some(SymbolKind::Months),
    },
    FieldSpec {
        position: 4,
        display_name: "day of the week",
        display_name_plural: "days of the week",
        prefix: "on",
        domain: 0..=6,
        single_symbols: &[WILDCARD, '?', 'L', '#'],
        separators: WEEKDAY_SEPARATORS,
        symbols: Some(SymbolKind::Weekdays),
    },
];

/// One of the five positional fields of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Minutes, `0-59`.
    Minute = 0,
    /// Hours, `0-23`.
    Hour = 1,
    /// Day of month, `1-31`.
    DayOfMonth = 2,
    /// Month, `1-12` or `JAN-DEC`.
    Month = 3,
    /// Day of week, `0-6` or `SUN-SAT`.
    DayOfWeek = 4,
}

impl Field {
    /// All fields in canonical (positional) order.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    #[inline]
    pub(crate) fn spec(&self) -> &'static FieldSpec {
        &REGISTRY[*self as usize]
    }

    /// Zero-based index of the field in the whitespace-split expression.
    pub fn position(&self) -> usize {
        self.spec().position
    }

    /// Singular human-readable name, i.e. `day of the month`.
    pub fn display_name(&self) -> &'static str {
        self.spec().display_name
    }

    /// Plural human-readable name, i.e. `days of the month`.
    pub fn display_name_plural(&self) -> &'static str {
        self.spec().display_name_plural
    }

    /// Preposition which introduces the field in a sentence.
    pub fn prefix(&self) -> &'static str {
        self.spec().prefix
    }

    /// Inclusive range of valid integer values.
    pub fn domain(&self) -> RangeInclusive<i64> {
        self.spec().domain.clone()
    }

    /// Single-character symbols which are valid alone.
    pub fn single_symbols(&self) -> &'static [char] {
        self.spec().single_symbols
    }

    /// Separators allowed inside the field value.
    pub fn separators(&self) -> &'static [Separator] {
        self.spec().separators
    }

    /// Short (abbreviated, uppercase) names from the default English tables, if the field has names.
    pub fn short_symbols(&self) -> Option<&'static [&'static str]> {
        SymbolTables::english().short(*self)
    }

    /// Full names from the default English tables, if the field has names.
    pub fn full_symbols(&self) -> Option<&'static [&'static str]> {
        SymbolTables::english().full(*self)
    }

    /// Returns the field's separator denoted by `c`, if any.
    pub(crate) fn separator_of(&self, c: char) -> Option<Separator> {
        self.separators().iter().copied().find(|s| s.as_char() == c)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_positions_follow_canonical_order() {
        for (index, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.position(), index, "field = {field:?}");
        }
    }

    #[rstest]
    #[case(Field::Minute, 0, 59)]
    #[case(Field::Hour, 0, 23)]
    #[case(Field::DayOfMonth, 1, 31)]
    #[case(Field::Month, 1, 12)]
    #[case(Field::DayOfWeek, 0, 6)]
    fn test_domain(#[case] field: Field, #[case] min: i64, #[case] max: i64) {
        assert_eq!(field.domain(), min..=max);
    }

    #[rstest]
    #[case(Field::Minute, "minute", "minutes", "at")]
    #[case(Field::Hour, "hour", "hours", "past")]
    #[case(Field::DayOfMonth, "day of the month", "days of the month", "on")]
    #[case(Field::Month, "month", "months", "in")]
    #[case(Field::DayOfWeek, "day of the week", "days of the week", "on")]
    fn test_names(#[case] field: Field, #[case] name: &str, #[case] plural: &str, #[case] prefix: &str) {
        assert_eq!(field.display_name(), name);
        assert_eq!(field.to_string(), name);
        assert_eq!(field.display_name_plural(), plural);
        assert_eq!(field.prefix(), prefix);
    }

    #[rstest]
    #[case(Field::Minute, &['*'])]
    #[case(Field::Hour, &['*'])]
    #[case(Field::DayOfMonth, &['*', '?', 'L', 'W'])]
    #[case(Field::Month, &['*'])]
    #[case(Field::DayOfWeek, &['*', '?', 'L', '#'])]
    fn test_single_symbols(#[case] field: Field, #[case] expected: &[char]) {
        assert_eq!(field.single_symbols(), expected);
    }

    #[test]
    fn test_nth_separator_is_weekday_only() {
        for field in Field::ALL {
            assert_eq!(
                field.separator_of('#').is_some(),
                field == Field::DayOfWeek,
                "field = {field:?}"
            );
            assert_eq!(field.separator_of(','), Some(Separator::List));
            assert_eq!(field.separator_of('-'), Some(Separator::Range));
            assert_eq!(field.separator_of('/'), Some(Separator::Step));
            assert_eq!(field.separator_of('*'), None);
        }
    }

    #[test]
    fn test_symbol_tables_presence() {
        assert_eq!(Field::Minute.short_symbols(), None);
        assert_eq!(Field::Hour.full_symbols(), None);
        assert_eq!(Field::DayOfMonth.short_symbols(), None);
        assert_eq!(Field::Month.short_symbols().map(<[_]>::len), Some(12));
        assert_eq!(Field::Month.full_symbols().map(<[_]>::len), Some(12));
        assert_eq!(Field::DayOfWeek.short_symbols().map(<[_]>::len), Some(7));
        assert_eq!(Field::DayOfWeek.full_symbols().map(<[_]>::len), Some(7));
    }

    #[rstest]
    #[case(Separator::List, ",")]
    #[case(Separator::Range, "-")]
    #[case(Separator::Step, "/")]
    #[case(Separator::Nth, "#")]
    fn test_separator_display(#[case] separator: Separator, #[case] expected: &str) {
        assert_eq!(separator.to_string(), expected);
    }
}
