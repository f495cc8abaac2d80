//! Input rules attached to flow steps.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{BakerError, Result};

/// Indian mobile number: 10 digits, first digit 6-9.
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());

/// Validation applied to free text before it is stored as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputRule {
    /// Strip everything but digits, then require a 10-digit mobile number.
    MobileNumber,
}

impl InputRule {
    /// Normalizes `raw` and checks it, returning the value to store.
    pub fn apply(&self, field: &str, raw: &str) -> Result<String> {
        match self {
            InputRule::MobileNumber => {
                let digits = normalize_phone(raw);
                if is_valid_phone(&digits) {
                    Ok(digits)
                } else {
                    Err(BakerError::validation(
                        field,
                        "Please enter a valid 10-digit mobile number starting with 6, 7, 8 or 9",
                    ))
                }
            }
        }
    }
}

/// Drops every non-digit character.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Expects already-normalized input.
pub fn is_valid_phone(digits: &str) -> bool {
    MOBILE_RE.is_match(digits)
}
