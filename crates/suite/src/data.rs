//! Test data generators and form value types
//!
//! Every entity a test creates carries a collision-resistant unique name
//! (timestamp suffix), so concurrent tests bound their own footprint
//! without cross-test locking.

use chrono::{Duration, Local, NaiveDate};

/// Timestamp suffix used to make entity names unique per creation.
pub fn unique_suffix() -> String {
    Local::now().format("%Y%m%d%H%M%S%3f").to_string()
}

/// A user account to create through the admin UI.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub firstname: String,
    pub lastname: String,
    pub login: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// A user with a collision-resistant login and email.
    pub fn unique() -> Self {
        let stamp = unique_suffix();
        Self {
            firstname: "Quality".to_string(),
            lastname: format!("Tester {}", stamp),
            login: format!("qa_{}", stamp),
            email: format!("qa_{}@example.com", stamp),
            password: "Testing123!".to_string(),
        }
    }
}

/// Half-day qualifier on leave dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
}

impl DayPart {
    pub fn label(&self) -> &'static str {
        match self {
            DayPart::Morning => "Morning",
            DayPart::Afternoon => "Afternoon",
        }
    }
}

/// Values for the create-leave form.
///
/// Every recognized option is listed here with a default; there is no
/// open-ended bag of extra properties.
#[derive(Debug, Clone)]
pub struct LeaveRequestForm {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub start_day_part: DayPart,
    pub end_date: NaiveDate,
    pub end_day_part: DayPart,
    pub cause: Option<String>,
}

impl Default for LeaveRequestForm {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            leave_type: "special leave".to_string(),
            start_date: today + Duration::days(1),
            start_day_part: DayPart::Morning,
            end_date: today + Duration::days(6),
            end_day_part: DayPart::Afternoon,
            cause: None,
        }
    }
}

impl LeaveRequestForm {
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_type(mut self, leave_type: impl Into<String>) -> Self {
        self.leave_type = leave_type.into();
        self
    }

    /// A leave request whose cause is unique per creation, for later
    /// lookup and cleanup.
    pub fn unique() -> Self {
        Self::default().with_cause(format!("Automated request {}", unique_suffix()))
    }
}

/// Status selected on the overtime form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeStatus {
    Planned,
    Requested,
}

impl OvertimeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OvertimeStatus::Planned => "Planned",
            OvertimeStatus::Requested => "Requested",
        }
    }
}

/// Values for the overtime request form.
#[derive(Debug, Clone)]
pub struct OvertimeForm {
    pub date: NaiveDate,
    /// Fraction of a day, as the form expects it ("0.125" .. "1").
    pub duration: String,
    pub cause: String,
    pub status: OvertimeStatus,
}

impl Default for OvertimeForm {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive() + Duration::days(1),
            duration: "0.5".to_string(),
            cause: format!("Overtime request {}", unique_suffix()),
            status: OvertimeStatus::Requested,
        }
    }
}

/// Date rendering used by the Jorani date inputs (English locale).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
