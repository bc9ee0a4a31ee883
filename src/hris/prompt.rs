//! Retry-until-valid prompts.
//!
//! Each `ask_*` function pairs a prompt with one of the checks in
//! [`crate::validation`]. Rejected answers produce a diagnostic on the console
//! and the prompt is shown again; nothing invalid is ever returned. The loops
//! only end early when the console runs out of input.

use crate::console::Console;
use crate::error::Result;
use crate::validation::{self, CaseRule, FieldError};
use chrono::NaiveDate;
use std::str::FromStr;

/// The generic coerce-then-check loop behind every field prompt.
pub fn prompt_until<C, T, F>(console: &mut C, prompt: &str, mut check: F) -> Result<T>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> std::result::Result<T, FieldError>,
{
    loop {
        let answer = console.read_line(prompt)?;
        match check(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(prompt, error = %err, "input rejected");
                console.diagnostic(&err.to_string());
            }
        }
    }
}

pub fn ask_name<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    prompt_until(console, prompt, validation::validate_name)
}

pub fn ask_date_of_birth<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    today: NaiveDate,
    min_age: u32,
) -> Result<NaiveDate> {
    prompt_until(console, prompt, |input| {
        validation::validate_date_of_birth(input, today, min_age)
    })
}

pub fn ask_hire_date<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
) -> Result<NaiveDate> {
    prompt_until(console, prompt, |input| {
        validation::validate_hire_date(input, today, min_date)
    })
}

pub fn ask_address<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    prompt_until(console, prompt, validation::validate_address)
}

pub fn ask_email<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    prompt_until(console, prompt, validation::validate_email)
}

pub fn ask_choice<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    field: &str,
    allowed: &[String],
    rule: CaseRule,
) -> Result<String> {
    prompt_until(console, prompt, |input| {
        validation::validate_choice(input, field, allowed, rule)
    })
}

pub fn ask_number<C, T, P>(console: &mut C, prompt: &str, predicate: P, hint: &str) -> Result<T>
where
    C: Console + ?Sized,
    T: FromStr,
    P: Fn(&T) -> bool,
{
    prompt_until(console, prompt, |input| {
        validation::validate_number(input, &predicate, hint)
    })
}

/// Returns `true` for `y`, `false` for `n`.
pub fn ask_confirmation<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool> {
    prompt_until(console, prompt, validation::validate_confirmation)
}

/// Returns a 1-based record number in `[1, len]`.
pub fn ask_record_number<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    len: usize,
) -> Result<usize> {
    prompt_until(console, prompt, |input| {
        validation::validate_record_number(input, len)
    })
}
