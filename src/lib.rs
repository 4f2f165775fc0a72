//! Cron expression validator and plain English explainer.
#![deny(unsafe_code, missing_docs)]

//! This is a small crate, intended to:
//! - validate classic 5-fields cron expressions field by field, with messages ready to be shown to a user;
//! - describe valid expressions as a human-readable sentence.
//!
//! _This is not a cron jobs scheduler and it doesn't calculate upcoming events._ If you need a scheduler,
//! look for [cron-lite](https://crates.io/crates/cron-lite)
//! or any [other similar crate](https://crates.io/search?q=cron%20scheduler).
//!
//! ## Cron expression format
//!
//! Expression has exactly five whitespace-separated fields: minutes, hours, days of month, months and days of week.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - / ? L W              |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 0-6 or SUN-SAT  | * , - / ? L #              |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`, `1-5,*/15`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`, `1-30/5`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`;
//! - `?` - any value, for days of month or week;
//! - `L` - last day of the month (for days of month), or last day of the week (for days of week);
//! - `W` - week day of the month;
//! - `#` - specific day of the week, i.e. `fri#1`, `1#4`; occurrence is a number from 1 to 5.
//!
//! Names are case-insensitive. Empty values inside a list, range or step are ignored, so `1,,5` is the same as `1,5`.
//!
//! ## How to use
//!
//! There are three entry points:
//! - [validate()]: checks all fields and returns one [`ValidationError`] per invalid field;
//! - [describe()]: validates the expression and returns its description;
//! - [`Expression`]: validated expression value, which may be described later.
//!
//! Expression with fewer or more than five fields isn't validated at all,
//! [`Error::IncompleteExpression`] or [`Error::TooManyFields`] is returned instead.
//!
//! ### Example with `validate`
//! ```rust
//! use cron_explain::{validate, Field, Result};
//!
//! fn check() -> Result<()> {
//!     let errors = validate("1,2,75 * 32 * *")?;
//!     assert_eq!(errors.len(), 2);
//!
//!     assert_eq!(errors[0].field(), Field::Minute);
//!     assert_eq!(errors[0].title(), "(Minute)");
//!     assert_eq!(
//!         errors[0].description(),
//!         "Expression '75' is not a valid value. Accepted values are [0-59]"
//!     );
//!
//!     Ok(())
//! }
//! # check().unwrap();
//! ```
//!
//! ### Example with `describe`
//! ```rust
//! use cron_explain::{describe, Expression, Result};
//!
//! fn explain() -> Result<()> {
//!     assert_eq!(describe("5 1,2,3 * * *")?, "At 1:05 AM, 2:05 AM, and 3:05 AM");
//!
//!     let expression = Expression::new("0 0 * 9 WED#5")?;
//!     assert_eq!(
//!         expression.describe(),
//!         "At 12:00 AM, in September, on the 5th Wednesday of the month"
//!     );
//!
//!     Ok(())
//! }
//! # explain().unwrap();
//! ```
//!
//! ### Localized names
//! Month and weekday names may be replaced with [`SymbolTables`], all entry points have a `_with` variant which accepts them.
//!
//! # Logging
//! The crate emits [tracing](https://crates.io/crates/tracing) events: `trace` for every rejected value,
//! `debug` for every validated and described expression. No subscriber is installed by the crate.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Expression`] and [`Field`],
//!   and `Serialize` for [`ValidationError`].

/// Sentence generator.
pub mod describe;
/// Crate specific Error implementation.
pub mod error;
/// Expression splitter and validated expression type.
pub mod expression;
/// Fields registry.
pub mod field;
mod pattern;
/// Month and weekday names.
pub mod symbols;
mod utils;
/// Field and expression validation.
pub mod validator;

// Re-export of public entities.
pub use describe::{describe, describe_with};
pub use error::{Error, ValidationError};
pub use expression::{field_token, split, Expression};
pub use field::{Field, Separator};
pub use symbols::SymbolTables;
pub use validator::{validate, validate_field, validate_field_with, validate_with};

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
