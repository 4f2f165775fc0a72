use crate::{
    expression::{self, FIELDS},
    field::{Field, PatternValueType, WILDCARD},
    pattern::{self, Token},
    symbols::SymbolTables,
    utils, validator, Error, Result,
};
use tracing::debug;

/// Validates the expression and describes it as an English sentence.
///
/// ```
/// assert_eq!(cron_explain::describe("*/5 * * * *").unwrap(), "At every 5th minute, past the hour");
/// ```
pub fn describe(pattern: &str) -> Result<String> {
    describe_with(pattern, SymbolTables::english())
}

/// Same as [`describe`], but month and weekday names come from `symbols`.
///
/// Fails with [`Error::InvalidExpression`] if any field is invalid,
/// the expression is never described partially.
pub fn describe_with(pattern: &str, symbols: &SymbolTables<'_>) -> Result<String> {
    let errors = validator::validate_with(pattern, symbols)?;
    if !errors.is_empty() {
        return Err(Error::InvalidExpression {
            pattern: pattern.to_owned(),
            errors,
        });
    }

    let fields = expression::split_fields(pattern)?;
    Ok(Interpreter::new(symbols).translate(&fields))
}

/// Translates valid fields into sentence fragments.
///
/// Doesn't validate anything: values it can't resolve are rendered as they were written.
pub(crate) struct Interpreter<'s> {
    symbols: &'s SymbolTables<'s>,
}

impl<'s> Interpreter<'s> {
    pub(crate) fn new(symbols: &'s SymbolTables<'s>) -> Self {
        Self { symbols }
    }

    /// Whole sentence: minute and hour first, then day of the month, month and day of the week.
    /// Wildcard days and months are omitted.
    pub(crate) fn translate(&self, fields: &[&str; FIELDS]) -> String {
        let [minute, hour, dom, month, dow] = *fields;

        let mut fragments = self.time(minute, hour);
        for (field, token) in [(Field::DayOfMonth, dom), (Field::Month, month), (Field::DayOfWeek, dow)] {
            if !is_wildcard(token) {
                fragments.push(self.fragment(field, token, Some(field.prefix())));
            }
        }

        let sentence = utils::capitalize(&fragments.join(", "));
        debug!(pattern = %fields.join(" "), %sentence, "described cron expression");
        sentence
    }

    /// Minute and hour fused into one or two fragments.
    fn time(&self, minute: &str, hour: &str) -> Vec<String> {
        let at = Some(Field::Minute.prefix());

        // Zero minute makes the hour the whole time
        if matches!(Token::classify(Field::Minute, minute), Token::Integer(0)) {
            return vec![self.fragment(Field::Hour, hour, at)];
        }

        if is_wildcard(hour) {
            let minutes = self.fragment(Field::Minute, minute, at);
            return if is_wildcard(minute) {
                vec![minutes]
            } else {
                vec![
                    minutes,
                    format!("{} the {}", Field::Hour.prefix(), Field::Hour.display_name()),
                ]
            };
        }

        match (integers(Field::Minute, minute), integers(Field::Hour, hour)) {
            (Some(minutes), Some(hours)) => {
                let times = hours
                    .iter()
                    .flat_map(|&h| minutes.iter().map(move |&m| utils::clock_time(h, m)))
                    .collect::<Vec<_>>();
                vec![format!("{} {}", Field::Minute.prefix(), utils::join_with_and(&times))]
            }
            _ => vec![
                self.fragment(Field::Minute, minute, at),
                self.fragment(Field::Hour, hour, Some(Field::Hour.prefix())),
            ],
        }
    }

    fn fragment(&self, field: Field, token: &str, prefix: Option<&str>) -> String {
        let body = self.body(field, token);
        match prefix {
            Some(prefix) => format!("{prefix} {body}"),
            None => body,
        }
    }

    fn body(&self, field: Field, token: &str) -> String {
        let name = field.display_name();

        match Token::classify(field, token) {
            Token::Integer(value) => self.integer(field, value),
            Token::Single(symbol) => self.symbol(field, symbol),
            // Full names are used as the tables spell them
            Token::Named(value) => self
                .symbols
                .expand(field, value)
                .map_or_else(|| value.to_owned(), str::to_owned),
            Token::List(items) => {
                let values = items.iter().map(|item| self.value_name(field, item)).collect::<Vec<_>>();
                let values = utils::join_with_and(&values);
                match field {
                    Field::Minute | Field::DayOfMonth => format!("{name} {values}"),
                    Field::Hour | Field::Month | Field::DayOfWeek => values,
                }
            }
            Token::ComplexList(items) => {
                let parts = items.iter().map(|item| self.body(field, item)).collect::<Vec<_>>();
                utils::join_with_and(&parts)
            }
            Token::Range(low, high) => {
                let from = self.value_name(field, low);
                match Token::classify(field, high) {
                    Token::Step(end, interval) => format!(
                        "every {} {name} from {from} through {}",
                        self.nth(field, interval),
                        self.value_name(field, end)
                    ),
                    _ => format!("every {name} from {from} through {}", self.value_name(field, high)),
                }
            }
            Token::Step(start, interval) => {
                let every = format!("every {} {name}", self.nth(field, interval));
                if is_wildcard(start) {
                    return every;
                }
                let start = match pattern::numeric_value(field, start, self.symbols) {
                    Some(value) => format!("{name} {value}"),
                    None => self.body(field, start),
                };
                format!("{every}, starting at {start}")
            }
            Token::Nth(weekday, occurrence) => {
                let nth = utils::parse_digital_value(occurrence).map_or_else(|| occurrence.to_owned(), utils::ordinal);
                match pattern::numeric_value(field, weekday, self.symbols) {
                    Some(value) => format!("the {nth} {} of the month", self.full_name(field, value)),
                    None => format!("the {nth} occurrence of {} in the month", self.body(field, weekday)),
                }
            }
            Token::Malformed(_) => token.to_owned(),
        }
    }

    fn integer(&self, field: Field, value: PatternValueType) -> String {
        match field {
            Field::Minute => format!("{} {value}", field.display_name()),
            Field::Hour => utils::clock_time(value, 0),
            Field::DayOfMonth => format!("the {} {}", utils::ordinal(value), field.display_name()),
            Field::Month | Field::DayOfWeek => self.full_name(field, value),
        }
    }

    fn symbol(&self, field: Field, symbol: char) -> String {
        let name = field.display_name();
        match (field, symbol) {
            (_, WILDCARD) => format!("every {name}"),
            (_, '?') => format!("any {name}"),
            (Field::DayOfWeek, 'L') => {
                format!("the last {name} ({})", self.full_name(field, *field.domain().start()))
            }
            (_, 'L') => format!("the last {name}"),
            (_, 'W') => format!("a week {name}"),
            _ => symbol.to_string(),
        }
    }

    /// Value as it appears inside ranges and lists: a number, a clock time or a full name.
    /// Nested patterns are described as a whole.
    fn value_name(&self, field: Field, token: &str) -> String {
        match pattern::numeric_value(field, token, self.symbols) {
            Some(value) => match field {
                Field::Hour => utils::clock_time(value, 0),
                Field::Month | Field::DayOfWeek => self.full_name(field, value),
                Field::Minute | Field::DayOfMonth => value.to_string(),
            },
            None => self.body(field, token),
        }
    }

    fn full_name(&self, field: Field, value: PatternValueType) -> String {
        self.symbols
            .full_name(field, value)
            .map_or_else(|| value.to_string(), str::to_owned)
    }

    fn nth(&self, field: Field, interval: &str) -> String {
        pattern::numeric_value(field, interval, self.symbols).map_or_else(|| interval.to_owned(), utils::ordinal)
    }
}

fn is_wildcard(token: &str) -> bool {
    token.chars().eq([WILDCARD])
}

/// Numbers of a plain number or a list of numbers.
fn integers(field: Field, token: &str) -> Option<Vec<PatternValueType>> {
    match Token::classify(field, token) {
        Token::Integer(value) => Some(vec![value]),
        Token::List(items) => items.iter().map(|item| utils::parse_digital_value(item)).collect(),
        _ => None,
    }
}
