//! Field validation rules for employee records.
//!
//! Every check here is pure: it takes the raw text the operator typed (and
//! whatever context the rule needs, such as today's date) and either returns
//! the coerced value or a [`FieldError`] describing the failing clause. The
//! prompt loops in [`crate::prompt`] turn these into retry-until-valid input.
//!
//! | Field        | Accepted                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | names        | at least 2 characters, letters only                             |
//! | dates        | `DD-MM-YYYY`, not in the future, year 1970 or later             |
//! | birth date   | also implies an age of at least `min_age`                       |
//! | hire date    | also on or after the caller's minimum date                      |
//! | address      | at least 5 of: letters, digits, whitespace, `.` `,` `#` `-`     |
//! | email        | `local@domain.tld`, segments of word chars, dots and hyphens    |
//! | choices      | a member of the allow-list after case normalization             |

use crate::model::{age_on, format_date, parse_date};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

/// Earliest year accepted for any date field.
pub const MIN_YEAR: i32 = 1970;

static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s.,#-]{5,}$").expect("address pattern must be a valid regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern must be a valid regex")
});

/// Why a field value was rejected. The `Display` text is the diagnostic shown
/// to the operator before the prompt is repeated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error(
        "Invalid input! Please enter at least 2 characters that are not numbers or special characters."
    )]
    InvalidName,

    #[error("Invalid date format! Please enter a valid date (DD-MM-YYYY).")]
    InvalidDateFormat,

    #[error("Invalid date! Please enter a date that is not in the future.")]
    FutureDate,

    #[error("Invalid date! Please enter a date in {} or later.", MIN_YEAR)]
    BeforeEpoch,

    #[error(
        "Invalid date! The employee does not meet the age requirement. The minimum age for employment is {0} years."
    )]
    UnderMinimumAge(u32),

    #[error("Invalid date! The hire date cannot be earlier than {0}.")]
    BeforeMinimumDate(String),

    #[error(
        "Invalid address format! The address should contain at least 5 characters: letters, numbers, spaces and . , # -"
    )]
    InvalidAddress,

    #[error("Invalid email address! Please enter a valid email address.")]
    InvalidEmail,

    #[error("Invalid {field}! Please choose one of: {}", .allowed.join(", "))]
    NotInList { field: String, allowed: Vec<String> },

    #[error("Invalid input! {0}")]
    InvalidNumber(String),

    #[error("Invalid input! Please enter 'y' for Yes or 'n' for No.")]
    InvalidConfirmation,

    #[error("Invalid input! Please enter a valid record number (1-{0}).")]
    InvalidRecordNumber(usize),
}

/// How an enumerated field normalizes operator input before comparing it
/// against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    /// `developer`, `DEVELOPER` and `Developer` all become `Developer`.
    Capitalized,
    /// Capitalized as above, or the fully upper-cased input (`hr` -> `HR`).
    CapitalizedOrUpper,
}

pub fn validate_name(input: &str) -> Result<String, FieldError> {
    if input.chars().count() >= 2 && input.chars().all(char::is_alphabetic) {
        Ok(input.to_string())
    } else {
        Err(FieldError::InvalidName)
    }
}

/// Parses a `DD-MM-YYYY` date that is neither in the future nor before 1970.
pub fn validate_past_date(input: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let date = parse_date(input).ok_or(FieldError::InvalidDateFormat)?;
    if date > today {
        return Err(FieldError::FutureDate);
    }
    if date.year() < MIN_YEAR {
        return Err(FieldError::BeforeEpoch);
    }
    Ok(date)
}

pub fn validate_date_of_birth(
    input: &str,
    today: NaiveDate,
    min_age: u32,
) -> Result<NaiveDate, FieldError> {
    let date = validate_past_date(input, today)?;
    if age_on(date, today) < min_age {
        return Err(FieldError::UnderMinimumAge(min_age));
    }
    Ok(date)
}

pub fn validate_hire_date(
    input: &str,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
) -> Result<NaiveDate, FieldError> {
    let date = validate_past_date(input, today)?;
    if let Some(min) = min_date {
        if date < min {
            return Err(FieldError::BeforeMinimumDate(format_date(min)));
        }
    }
    Ok(date)
}

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

pub fn validate_address(input: &str) -> Result<String, FieldError> {
    if is_valid_address(input) {
        Ok(input.to_string())
    } else {
        Err(FieldError::InvalidAddress)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(input: &str) -> Result<String, FieldError> {
    if is_valid_email(input) {
        Ok(input.to_string())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Matches `input` against `allowed` and returns the allow-list's spelling.
pub fn validate_choice(
    input: &str,
    field: &str,
    allowed: &[String],
    rule: CaseRule,
) -> Result<String, FieldError> {
    let input = input.trim();
    let mut candidates = vec![capitalize(input)];
    if rule == CaseRule::CapitalizedOrUpper {
        candidates.push(input.to_uppercase());
    }

    allowed
        .iter()
        .find(|option| candidates.iter().any(|c| c == *option))
        .cloned()
        .ok_or_else(|| FieldError::NotInList {
            field: field.to_string(),
            allowed: allowed.to_vec(),
        })
}

/// Coerces `input` to `T` and checks `predicate`. Parse failures and
/// predicate failures report the same `hint`.
pub fn validate_number<T, P>(input: &str, predicate: P, hint: &str) -> Result<T, FieldError>
where
    T: FromStr,
    P: Fn(&T) -> bool,
{
    match input.trim().parse::<T>() {
        Ok(value) if predicate(&value) => Ok(value),
        _ => Err(FieldError::InvalidNumber(hint.to_string())),
    }
}

/// `y` / `n` in either case. Returns whether the answer was yes.
pub fn validate_confirmation(input: &str) -> Result<bool, FieldError> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(FieldError::InvalidConfirmation),
    }
}

/// A 1-based record number within `[1, len]`.
pub fn validate_record_number(input: &str, len: usize) -> Result<usize, FieldError> {
    validate_number(input, |n: &usize| (1..=len).contains(n), "")
        .map_err(|_| FieldError::InvalidRecordNumber(len))
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
