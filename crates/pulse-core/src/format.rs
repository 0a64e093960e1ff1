//! Thousands grouping for display numbers.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

/// A digit run followed by exactly three more digits. ASCII-only, so other
/// scripts' digits are left alone.
static GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([0-9]{3})").expect("valid grouping regex"));

/// Insert `,` every three digits of the integer part.
///
/// The value's text form is split on `.`: the first piece is grouped, the
/// second (if any) is reattached unchanged, further pieces are dropped.
/// Grouping repeatedly rewrites the leftmost `<digits><3 digits>` match
/// until none remains, so anything that isn't a digit (a sign, letters)
/// just bounds a run.
///
/// ```
/// use pulse_core::add_commas;
///
/// assert_eq!(add_commas(1234567), "1,234,567");
/// assert_eq!(add_commas("1234567.89"), "1,234,567.89");
/// assert_eq!(add_commas(999), "999");
/// ```
pub fn add_commas(value: impl Display) -> String {
    let text = value.to_string();
    let mut pieces = text.split('.');
    let mut integer = pieces.next().unwrap_or_default().to_owned();
    let fraction = pieces.next().map(|f| format!(".{f}")).unwrap_or_default();

    while GROUP.is_match(&integer) {
        integer = GROUP.replace(&integer, "${1},${2}").into_owned();
    }

    integer + &fraction
}
