//! Employee record schema and the fields derived from it.
//!
//! Dates are kept as [`NaiveDate`] in memory and written as `DD-MM-YYYY`
//! strings everywhere they are persisted or shown.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `strftime` pattern for every date the operator types or the store keeps.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Years between birth and the earliest allowed hire date.
pub const HIRE_AGE_YEARS: u64 = 18;

/// Column order for tabular stores and record listings.
pub const FIELD_NAMES: [&str; 10] = [
    "first_name",
    "last_name",
    "date_of_birth",
    "age",
    "address",
    "email",
    "job_position",
    "department",
    "salary",
    "hire_date",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
    /// Derived from `date_of_birth` when the record was last written. Not live.
    pub age: u32,
    pub address: String,
    pub email: String,
    pub job_position: String,
    pub department: String,
    pub salary: f64,
    #[serde(with = "date_format")]
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Re-derives `age` from `date_of_birth` as of `today`.
    pub fn recompute_age(&mut self, today: NaiveDate) {
        self.age = age_on(self.date_of_birth, today);
    }

    /// Values in [`FIELD_NAMES`] order, as they are written to a worksheet row.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            format_date(self.date_of_birth),
            self.age.to_string(),
            self.address.clone(),
            self.email.clone(),
            self.job_position.clone(),
            self.department.clone(),
            self.salary.to_string(),
            format_date(self.hire_date),
        ]
    }

    /// Builds a record from a header-keyed mapping, as produced by zipping a
    /// worksheet row with its lower-cased header row.
    ///
    /// The error names the first missing or unparseable field.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, String> {
        // Text cells are kept as stored; only parsed cells are trimmed.
        let text = |name: &str| -> Result<String, String> {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| format!("missing field '{}'", name))
        };
        let date = |name: &str| -> Result<NaiveDate, String> {
            let raw = text(name)?;
            parse_date(&raw).ok_or_else(|| format!("invalid {} '{}'", name, raw))
        };

        let age_raw = text("age")?;
        let age = age_raw
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid age '{}'", age_raw))?;
        let salary_raw = text("salary")?;
        let salary = salary_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid salary '{}'", salary_raw))?;

        Ok(Self {
            first_name: text("first_name")?,
            last_name: text("last_name")?,
            date_of_birth: date("date_of_birth")?,
            age,
            address: text("address")?,
            email: text("email")?,
            job_position: text("job_position")?,
            department: text("department")?,
            salary,
            hire_date: date("hire_date")?,
        })
    }
}

/// Whole years between `birth` and `today`.
///
/// Calendar-year difference, minus one when today's (month, day) falls before
/// the birthday's. No leap-year special casing: a 29 February birthday counts
/// from 1 March in common years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Lower bound for a hire date: birth plus eighteen flat 365-day years.
pub fn min_hire_date(birth: NaiveDate) -> NaiveDate {
    birth
        .checked_add_days(Days::new(HIRE_AGE_YEARS * 365))
        .unwrap_or(NaiveDate::MAX)
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter keeping dates in `DD-MM-YYYY` form on disk.
pub mod date_format {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }
}
