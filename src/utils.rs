//! Common utility functions.
use crate::field::PatternValueType;
use chrono::NaiveTime;

/// Converts string into a number, without bounds validation.
///
/// Accepts everything Rust accepts as `i64`, so `-1` and `+5` are numbers (possibly out of bounds).
#[inline]
pub(crate) fn parse_digital_value(input: &str) -> Option<PatternValueType> {
    input.parse::<PatternValueType>().ok()
}

/// Converts string with mnemonic value representation into its position in `values`.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<PatternValueType> {
    if input.is_empty() {
        None
    } else {
        let input = input.to_uppercase();
        values
            .iter()
            .position(|x| x.to_uppercase() == input)
            .map(|i| i as PatternValueType)
    }
}

/// English ordinal form of the number: `1st`, `2nd`, `11th`, `23rd`.
pub(crate) fn ordinal(value: PatternValueType) -> String {
    let suffix = match (value.abs() % 10, value.abs() % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    format!("{value}{suffix}")
}

/// Formats time as a 12-hour clock, i.e. `12:00 AM` or `5:07 PM`.
pub(crate) fn clock_time(hour: PatternValueType, minute: PatternValueType) -> String {
    u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| format!("{hour}:{minute:02}"))
}

/// Joins items as an English enumeration: `a`, `a and b`, `a, b, and c`.
pub(crate) fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [single] => single.as_ref().to_owned(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head = head.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}

/// Upper-cases the first letter and leaves the rest untouched.
pub(crate) fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every word, i.e. `day of the month` becomes `Day Of The Month`.
pub(crate) fn title_case(input: &str) -> String {
    input.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}
