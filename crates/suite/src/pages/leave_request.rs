//! Create-leave form
//!
//! The status buttons double as submit; the application binds the real
//! handler on the second click, so submission is a dblclick.

use jorani_harness::{wait_until_visible, Driver, Result};

use crate::data::{format_date, LeaveRequestForm};

use super::{bootbox_message, WAIT};

const TYPE_SELECT: &str = "#type";
const START_DATE: &str = "#viz_startdate";
const START_DAY_PART: &str = "#startdatetype";
const END_DATE: &str = "#viz_enddate";
const END_DAY_PART: &str = "#enddatetype";
const CAUSE: &str = "textarea[name=\"cause\"]";
const DURATION: &str = "#duration";
const SUBMIT_REQUESTED: &str = "button[name=\"status\"][value=\"2\"]";
const SUBMIT_PLANNED: &str = "button[name=\"status\"][value=\"1\"]";
const CREDIT_ALERT: &str = "#lblCreditAlert";
const OVERLAP_ALERT: &str = "#lbl0verlappingAlert";

pub struct LeaveRequestPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> LeaveRequestPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    pub async fn fill(&self, form: &LeaveRequestForm) -> Result<()> {
        wait_until_visible(self.driver, TYPE_SELECT, WAIT).await?;
        self.driver
            .select_option(TYPE_SELECT, &form.leave_type)
            .await?;
        self.driver
            .fill(START_DATE, &format_date(form.start_date))
            .await?;
        self.driver
            .select_option(START_DAY_PART, form.start_day_part.label())
            .await?;
        self.driver
            .fill(END_DATE, &format_date(form.end_date))
            .await?;
        self.driver
            .select_option(END_DAY_PART, form.end_day_part.label())
            .await?;
        if let Some(cause) = &form.cause {
            self.driver.fill(CAUSE, cause).await?;
        }
        Ok(())
    }

    /// The computed duration field, filled in by the page after the dates
    /// are entered.
    pub async fn duration(&self) -> Result<String> {
        self.driver.input_value(DURATION).await
    }

    /// Submit with status "Requested" and land on the leave list.
    pub async fn submit_requested(&self) -> Result<()> {
        self.driver.dblclick(SUBMIT_REQUESTED).await?;
        self.driver.wait_for_url("**/leaves", WAIT).await
    }

    /// Submit with status "Planned" and land on the leave list.
    pub async fn submit_planned(&self) -> Result<()> {
        self.driver.dblclick(SUBMIT_PLANNED).await?;
        self.driver.wait_for_url("**/leaves", WAIT).await
    }

    /// Submit expecting a validation modal instead of a navigation.
    /// Returns the modal body text after dismissing it.
    pub async fn submit_expecting_error(&self) -> Result<String> {
        self.driver.dblclick(SUBMIT_REQUESTED).await?;
        bootbox_message(self.driver).await
    }

    /// Whether the not-enough-credit warning is showing.
    pub async fn credit_alert_visible(&self) -> Result<bool> {
        self.driver.is_visible(CREDIT_ALERT).await
    }

    /// Whether the overlapping-request warning is showing.
    pub async fn overlap_alert_visible(&self) -> Result<bool> {
        self.driver.is_visible(OVERLAP_ALERT).await
    }
}
