use crate::field::{Field, PatternValueType, SymbolKind};
use crate::utils;

static ENGLISH: SymbolTables<'static> = SymbolTables {
    short_months: [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ],
    full_months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short_weekdays: ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
    full_weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
};

/// Month and weekday names used to validate named values and to describe expressions.
///
/// Short and full tables are index-aligned: months start with January, weekdays start with Sunday.
/// Short names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolTables<'a> {
    short_months: [&'a str; 12],
    full_months: [&'a str; 12],
    short_weekdays: [&'a str; 7],
    full_weekdays: [&'a str; 7],
}

impl<'a> SymbolTables<'a> {
    /// Constructs tables from localized names.
    pub const fn new(
        short_months: [&'a str; 12],
        full_months: [&'a str; 12],
        short_weekdays: [&'a str; 7],
        full_weekdays: [&'a str; 7],
    ) -> Self {
        Self {
            short_months,
            full_months,
            short_weekdays,
            full_weekdays,
        }
    }

    /// Default English names.
    pub fn english() -> &'static SymbolTables<'static> {
        &ENGLISH
    }

    /// Short names of the field's values, if the field has names.
    pub fn short(&self, field: Field) -> Option<&[&'a str]> {
        match field.spec().symbols? {
            SymbolKind::Months => Some(self.short_months.as_slice()),
            SymbolKind::Weekdays => Some(self.short_weekdays.as_slice()),
        }
    }

    /// Full names of the field's values, if the field has names.
    pub fn full(&self, field: Field) -> Option<&[&'a str]> {
        match field.spec().symbols? {
            SymbolKind::Months => Some(self.full_months.as_slice()),
            SymbolKind::Weekdays => Some(self.full_weekdays.as_slice()),
        }
    }

    /// Converts short name into the field's value, i.e. `MAR` is `3` for months.
    pub(crate) fn value_of(&self, field: Field, name: &str) -> Option<PatternValueType> {
        let index = utils::parse_string_value(name, self.short(field)?)?;
        Some(index + field.domain().start())
    }

    /// Full name of the field's value, i.e. `3` is `March` for months.
    pub(crate) fn full_name(&self, field: Field, value: PatternValueType) -> Option<&'a str> {
        let index = usize::try_from(value - field.domain().start()).ok()?;
        self.full(field)?.get(index).copied()
    }

    /// Full name which corresponds to the short one, i.e. `MAR` is `March`.
    pub(crate) fn expand(&self, field: Field, name: &str) -> Option<&'a str> {
        self.full_name(field, self.value_of(field, name)?)
    }
}

impl Default for SymbolTables<'static> {
    fn default() -> Self {
        ENGLISH.clone()
    }
}
