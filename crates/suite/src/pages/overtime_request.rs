//! Create-overtime form

use jorani_harness::{wait_until_visible, Driver, Result};

use crate::data::{format_date, OvertimeForm};

use super::{flash_message, WAIT};

const DATE_INPUT: &str = "#viz_date";
const DURATION_INPUT: &str = "#duration";
const CAUSE_INPUT: &str = "#cause";
const STATUS_SELECT: &str = "select[name=\"status\"]";
const SUBMIT: &str = "#cmdCreateExtra";

pub struct OvertimeRequestPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> OvertimeRequestPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    /// Fill and submit the form, then return the flash text shown on the
    /// overtime list.
    pub async fn create(&self, form: &OvertimeForm) -> Result<String> {
        wait_until_visible(self.driver, DATE_INPUT, WAIT).await?;
        self.driver.fill(DATE_INPUT, &format_date(form.date)).await?;
        self.driver.fill(DURATION_INPUT, &form.duration).await?;
        self.driver.fill(CAUSE_INPUT, &form.cause).await?;
        self.driver
            .select_option(STATUS_SELECT, form.status.label())
            .await?;
        self.driver.click(SUBMIT).await?;
        self.driver.wait_for_url("**/extra", WAIT).await?;
        flash_message(self.driver).await
    }
}
