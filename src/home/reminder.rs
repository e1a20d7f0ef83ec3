use chrono::{DateTime, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Recurrence rule for recurring reminders
///
/// Defines how a reminder repeats after completion.
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRule {
    /// Repeats every day
    daily,
    /// Repeats every week
    weekly,
    /// Repeats every calendar month
    monthly,
    /// Repeats every calendar year
    yearly,
}

impl FromStr for RecurrenceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(RecurrenceRule::daily),
            "weekly" => Ok(RecurrenceRule::weekly),
            "monthly" => Ok(RecurrenceRule::monthly),
            "yearly" => Ok(RecurrenceRule::yearly),
            _ => Err(format!(
                "Invalid recurrence rule '{}'. Valid options are: daily, weekly, monthly, yearly",
                s
            )),
        }
    }
}

/// Calculate the due date of the next occurrence for a recurrence rule
///
/// # Arguments
/// * `due_date` - The due date of the occurrence being completed
/// * `rule` - The recurrence rule to apply
///
/// # Returns
/// The next due date, or None if the calendar arithmetic overflows.
/// Monthly and yearly steps clamp to the last day of the target month
/// (e.g. Jan 31 + 1 month = Feb 28, Feb 29 + 1 year = Feb 28).
pub fn next_due_date(due_date: NaiveDate, rule: &RecurrenceRule) -> Option<NaiveDate> {
    match rule {
        RecurrenceRule::daily => due_date.checked_add_days(Days::new(1)),
        RecurrenceRule::weekly => due_date.checked_add_days(Days::new(7)),
        RecurrenceRule::monthly => due_date.checked_add_months(Months::new(1)),
        RecurrenceRule::yearly => due_date.checked_add_months(Months::new(12)),
    }
}

/// Kind of household entity a reminder can be attached to
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemindableKind {
    /// A tracked household appliance
    appliance,
    /// A household task
    task,
}

impl FromStr for RemindableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appliance" => Ok(RemindableKind::appliance),
            "task" => Ok(RemindableKind::task),
            _ => Err(format!(
                "Invalid remindable kind '{}'. Valid options are: appliance, task",
                s
            )),
        }
    }
}

/// Weak reference to the household entity that owns a reminder
///
/// The core only threads the kind + id pair; resolving it to a concrete
/// entity is the owning collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemindableRef {
    pub kind: RemindableKind,
    pub id: String,
}

/// A household reminder
///
/// A reminder is Pending while `completed_at` is unset and Completed once
/// it is stamped. A completed reminder never becomes pending again; for
/// recurring reminders the lifecycle instead spawns a fresh successor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier generated by the data container (e.g. "#1")
    pub id: String,
    /// Short description of what is due
    pub title: String,
    /// Calendar date the reminder is due (no time-of-day component)
    pub due_date: NaiveDate,
    /// Completion timestamp; None means the reminder is still pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
    /// Optional recurrence rule; absent means one-shot
    ///
    /// Unknown rule strings in the stored file deserialize to None, so a
    /// reminder with an unrecognized rule behaves as one-shot instead of
    /// failing the load.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_rule"
    )]
    pub recurrence_rule: Option<RecurrenceRule>,
    /// Optional owning entity (kind + id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remindable: Option<RemindableRef>,
    /// Actor that created the reminder
    pub created_by: String,
    /// Date when the reminder was created
    pub created_at: NaiveDate,
}

fn lenient_rule<'de, D>(deserializer: D) -> Result<Option<RecurrenceRule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

impl Reminder {
    /// Check if this reminder is still pending
    pub fn is_pending(&self) -> bool {
        self.completed_at.is_none()
    }

    /// Check if this reminder has a recurrence rule
    pub fn is_recurring(&self) -> bool {
        self.recurrence_rule.is_some()
    }

    /// Check if this reminder is overdue as of the given date
    ///
    /// True iff the reminder is pending and its due date is strictly before
    /// `today`. Completed reminders are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_rule_adds_one_day() {
        assert_eq!(
            next_due_date(date(2025, 1, 1), &RecurrenceRule::daily),
            Some(date(2025, 1, 2))
        );
        // Crosses a month boundary
        assert_eq!(
            next_due_date(date(2025, 1, 31), &RecurrenceRule::daily),
            Some(date(2025, 2, 1))
        );
    }

    #[test]
    fn test_weekly_rule_adds_seven_days() {
        assert_eq!(
            next_due_date(date(2025, 3, 10), &RecurrenceRule::weekly),
            Some(date(2025, 3, 17))
        );
        // Crosses a year boundary
        assert_eq!(
            next_due_date(date(2024, 12, 30), &RecurrenceRule::weekly),
            Some(date(2025, 1, 6))
        );
    }

    #[test]
    fn test_monthly_rule_preserves_day_of_month() {
        assert_eq!(
            next_due_date(date(2025, 1, 15), &RecurrenceRule::monthly),
            Some(date(2025, 2, 15))
        );
        assert_eq!(
            next_due_date(date(2025, 12, 1), &RecurrenceRule::monthly),
            Some(date(2026, 1, 1))
        );
    }

    #[test]
    fn test_monthly_rule_clamps_to_end_of_shorter_month() {
        // Jan 31 + 1 month lands on the last day of February
        assert_eq!(
            next_due_date(date(2025, 1, 31), &RecurrenceRule::monthly),
            Some(date(2025, 2, 28))
        );
        // Leap year February has 29 days
        assert_eq!(
            next_due_date(date(2024, 1, 31), &RecurrenceRule::monthly),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            next_due_date(date(2025, 3, 31), &RecurrenceRule::monthly),
            Some(date(2025, 4, 30))
        );
    }

    #[test]
    fn test_yearly_rule_adds_one_year() {
        assert_eq!(
            next_due_date(date(2025, 6, 15), &RecurrenceRule::yearly),
            Some(date(2026, 6, 15))
        );
    }

    #[test]
    fn test_yearly_rule_clamps_leap_day() {
        // Feb 29 + 1 year clamps to Feb 28
        assert_eq!(
            next_due_date(date(2024, 2, 29), &RecurrenceRule::yearly),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_rule_parsing() {
        assert_eq!("daily".parse(), Ok(RecurrenceRule::daily));
        assert_eq!("weekly".parse(), Ok(RecurrenceRule::weekly));
        assert_eq!("monthly".parse(), Ok(RecurrenceRule::monthly));
        assert_eq!("yearly".parse(), Ok(RecurrenceRule::yearly));
        assert!("fortnightly".parse::<RecurrenceRule>().is_err());
        assert!("Daily".parse::<RecurrenceRule>().is_err());
    }

    #[test]
    fn test_overdue_is_strict_date_comparison() {
        let reminder = Reminder {
            id: "#1".to_string(),
            title: "Water plants".to_string(),
            due_date: date(2025, 5, 10),
            completed_at: None,
            recurrence_rule: None,
            remindable: None,
            created_by: "local".to_string(),
            created_at: date(2025, 5, 1),
        };

        assert!(reminder.is_overdue(date(2025, 5, 11)));
        assert!(!reminder.is_overdue(date(2025, 5, 10)));
        assert!(!reminder.is_overdue(date(2025, 5, 9)));
    }

    #[test]
    fn test_completed_reminder_is_never_overdue() {
        let reminder = Reminder {
            id: "#1".to_string(),
            title: "Water plants".to_string(),
            due_date: date(2025, 5, 10),
            completed_at: Some(Local::now()),
            recurrence_rule: None,
            remindable: None,
            created_by: "local".to_string(),
            created_at: date(2025, 5, 1),
        };

        assert!(!reminder.is_overdue(date(2030, 1, 1)));
    }
}
