//! Validation helper functions for homekeeper
//!
//! This module contains input validation logic shared by the handlers:
//! title checks, date parsing, recurrence rules and remindable references.

use crate::home::{RecurrenceRule, RemindableKind, RemindableRef};
use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;

/// Validate and normalize a reminder or page title
///
/// # Arguments
/// * `title` - Raw title text
///
/// # Returns
/// The trimmed title, or an error if it is empty after trimming
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        bail!("Title must not be empty");
    }
    Ok(trimmed.to_string())
}

/// Parse and validate a due date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Parse and validate a recurrence rule parameter
pub fn parse_recurrence_rule(rule_str: &str) -> Result<RecurrenceRule> {
    rule_str.parse::<RecurrenceRule>().map_err(|e| anyhow!(e))
}

/// Parse a remindable reference in `kind:id` form (e.g. "appliance:a-1")
pub fn parse_remindable(ref_str: &str) -> Result<RemindableRef> {
    let Some((kind, id)) = ref_str.split_once(':') else {
        bail!(
            "Invalid remindable reference '{}'. Use kind:id (e.g., 'appliance:a-1')",
            ref_str
        );
    };
    let kind: RemindableKind = kind.parse().map_err(|e: String| anyhow!(e))?;
    if id.is_empty() {
        bail!("Remindable reference '{}' is missing an id", ref_str);
    }
    Ok(RemindableRef {
        kind,
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::RemindableKind;

    #[test]
    fn test_validate_title_trims() {
        assert_eq!(validate_title("  Replace filter  ").unwrap(), "Replace filter");
        assert!(validate_title("   ").is_err());
        assert!(validate_title("").is_err());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_due_date("15/03/2025").is_err());
        assert!(parse_due_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_remindable() {
        let r = parse_remindable("appliance:a-1").unwrap();
        assert_eq!(r.kind, RemindableKind::appliance);
        assert_eq!(r.id, "a-1");

        assert!(parse_remindable("appliance").is_err());
        assert!(parse_remindable("appliance:").is_err());
        assert!(parse_remindable("plant:a-1").is_err());
    }
}
