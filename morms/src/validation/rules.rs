//! Built-in rules.
//!
//! Every constructor takes its parameters plus an optional custom message;
//! the default message is used when none is given. All rules except
//! [`required`] let absent values through.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use super::error::RuleError;
use super::rule::Rule;
use super::value::Value;

static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:[.,]([0-9]*))?$").expect("float pattern compiles"));

static MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("MAC address pattern compiles")
});

fn message_or(custom: Option<&str>, default: impl FnOnce() -> String) -> String {
    custom.map_or_else(default, str::to_string)
}

fn text_matches(value: &Value, f: impl FnOnce(&str) -> bool) -> bool {
    value.as_text().is_some_and(|text| f(&*text))
}

/// Reject absent values (missing or empty text).
pub fn required(message: Option<&str>) -> Rule {
    let message = message_or(message, || "This field is required".to_string());
    Rule::check("required", |v| !v.is_absent(), message)
}

/// Accept whole numbers, given as numbers or as numeric text.
pub fn integer(message: Option<&str>) -> Rule {
    let message = message_or(message, || "Must be a whole number".to_string());
    Rule::when_present(
        "integer",
        |v| v.as_number().is_some_and(|n| n.fract() == 0.0),
        message,
    )
}

/// Accept decimal numbers.
///
/// The integer part may be signed and the decimals may be separated by
/// `.` or `,`. Without `max_decimals` any number of decimals is accepted,
/// including none after a trailing separator (`"10."`). With `max_decimals`
/// a separator must be followed by between one and `max_decimals` digits.
pub fn float(max_decimals: Option<usize>, message: Option<&str>) -> Rule {
    let message = message_or(message, || match max_decimals {
        Some(max) => format!("Must be a number with a maximum of {max} decimals"),
        None => "Must be a number".to_string(),
    });

    Rule::when_present(
        "float",
        move |v| {
            text_matches(v, |text| {
                let Some(caps) = FLOAT.captures(text) else {
                    return false;
                };
                match (max_decimals, caps.get(1)) {
                    (Some(max), Some(decimals)) => (1..=max).contains(&decimals.as_str().len()),
                    _ => true,
                }
            })
        },
        message,
    )
}

/// Accept values whose characters are all digits of `radix`.
///
/// Digits above 9 are the letters `a`-`z` in either case. Prefixes such as
/// `0x` are not understood. Fails to construct for a radix outside `2..=36`.
pub fn base(radix: u32, message: Option<&str>) -> Result<Rule, RuleError> {
    if !(2..=36).contains(&radix) {
        return Err(RuleError::InvalidRadix { radix });
    }

    let message = message_or(message, || format!("Must be a base {radix} number"));
    Ok(Rule::when_present(
        "base",
        move |v| text_matches(v, |text| text.chars().all(|c| c.is_digit(radix))),
        message,
    ))
}

/// Accept values whose leading integer is at most `bound`.
///
/// Values without a leading integer cannot be compared and pass; combine
/// with [`integer`] or [`float`] to require a number.
pub fn max_value(bound: i64, message: Option<&str>) -> Rule {
    let message = message_or(message, || format!("Must be smaller than {bound}"));
    Rule::when_present(
        "max_value",
        move |v| v.leading_integer().is_none_or(|n| n <= bound as f64),
        message,
    )
}

/// Accept values whose leading integer is at least `bound`.
///
/// Values without a leading integer cannot be compared and pass.
pub fn min_value(bound: i64, message: Option<&str>) -> Rule {
    let message = message_or(message, || format!("Must be larger than {bound}"));
    Rule::when_present(
        "min_value",
        move |v| v.leading_integer().is_none_or(|n| n >= bound as f64),
        message,
    )
}

/// Upper bound check under its historical name.
#[deprecated(note = "enforces an upper bound; use `max_value`")]
pub fn greater_than(bound: i64, message: Option<&str>) -> Rule {
    max_value(bound, message)
}

/// Lower bound check under its historical name.
#[deprecated(note = "enforces a lower bound; use `min_value`")]
pub fn lesser_than(bound: i64, message: Option<&str>) -> Rule {
    min_value(bound, message)
}

/// Accept six hexadecimal byte pairs separated by `:` or `-`.
pub fn mac_address(message: Option<&str>) -> Rule {
    let message = message_or(message, || "Not a valid MAC address".to_string());
    Rule::when_present(
        "mac_address",
        |v| text_matches(v, |text| MAC_ADDRESS.is_match(text)),
        message,
    )
}

/// Accept dotted-quad IPv4 addresses.
///
/// Octets range from 0 to 255 and may not carry leading zeros. A trailing
/// dot is rejected.
pub fn ip_address(message: Option<&str>) -> Rule {
    let message = message_or(message, || "Not a valid IP address".to_string());
    Rule::when_present(
        "ip_address",
        |v| text_matches(v, |text| text.parse::<Ipv4Addr>().is_ok()),
        message,
    )
}

/// Accept values at least `min` characters long.
pub fn min_length(min: usize, message: Option<&str>) -> Rule {
    let message = message_or(message, || format!("Must at least be {min} characters long"));
    Rule::when_present(
        "min_length",
        move |v| text_matches(v, |text| text.chars().count() >= min),
        message,
    )
}

/// Accept values at most `max` characters long.
pub fn max_length(max: usize, message: Option<&str>) -> Rule {
    let message = message_or(message, || format!("Must at most be {max} characters long"));
    Rule::when_present(
        "max_length",
        move |v| text_matches(v, |text| text.chars().count() <= max),
        message,
    )
}

/// Accept syntactically valid e-mail addresses.
pub fn email(message: Option<&str>) -> Rule {
    let message = message_or(message, || "Not a valid e-mail address".to_string());
    Rule::when_present(
        "email",
        |v| text_matches(v, email_address::EmailAddress::is_valid),
        message,
    )
}

/// Accept values whose text matches a regular expression.
///
/// The expression is not anchored; use `^...$` to match the whole value.
pub fn pattern(expr: &str, message: Option<&str>) -> Result<Rule, RuleError> {
    let re = Regex::new(expr).map_err(|source| RuleError::InvalidPattern {
        pattern: expr.to_string(),
        source,
    })?;

    let message = message_or(message, || "Does not match the expected format".to_string());
    Ok(Rule::when_present(
        "pattern",
        move |v| text_matches(v, |text| re.is_match(text)),
        message,
    ))
}
