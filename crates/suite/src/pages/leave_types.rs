//! Leave-types administration screen
//!
//! Creation and deletion both run through Bootstrap modals on top of a
//! plain table (no DataTables widget here).

use jorani_harness::{wait_until_visible, Driver, HarnessError, Result, WaitState};

use super::{bootbox_message, flash_message, WAIT};

const ADD_BUTTON: &str = "a[data-target='#frmAddLeaveType']";
const ADD_MODAL: &str = "#frmAddLeaveType";
const NAME_INPUT: &str = "#name";
const ACRONYM_INPUT: &str = "#acronym";
const DEDUCT_CHECKBOX: &str = "#deduct_days_off";
const CREATE_BUTTON: &str = "#cmdCreateLeaveType";
const CANCEL_BUTTON: &str = "#frmAddLeaveType button[data-dismiss='modal']";

const ROWS: &str = "#leave-types tbody tr";
const ROW_DELETE_LINK: &str = "a[data-target='#frmDeleteLeaveType']";
const DELETE_MODAL: &str = "#frmDeleteLeaveType";
const DELETE_CONFIRM: &str = "#lnkDeleteLeaveType";

pub struct LeaveTypesPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> LeaveTypesPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    pub async fn row_texts(&self) -> Result<Vec<String>> {
        let count = self.driver.count(ROWS).await?;
        let mut rows = Vec::with_capacity(count);
        for i in 1..=count {
            let selector = format!("{}:nth-child({})", ROWS, i);
            rows.push(self.driver.inner_text(&selector).await?);
        }
        Ok(rows)
    }

    pub async fn type_exists(&self, name: &str) -> Result<bool> {
        Ok(self.row_texts().await?.iter().any(|row| row.contains(name)))
    }

    /// Create a leave type through the modal and wait for the flash.
    pub async fn create(&self, name: &str, acronym: &str, deduct_days_off: bool) -> Result<String> {
        self.open_create_modal().await?;
        self.driver.fill(NAME_INPUT, name).await?;
        self.driver.fill(ACRONYM_INPUT, acronym).await?;
        self.driver.set_checked(DEDUCT_CHECKBOX, deduct_days_off).await?;
        self.driver.click(CREATE_BUTTON).await?;
        self.driver
            .wait_for_selector(ADD_MODAL, WaitState::Hidden, WAIT)
            .await?;
        flash_message(self.driver).await
    }

    /// Attempt a creation expected to be rejected as a duplicate. Returns
    /// the validation modal's body text; the add modal is left dismissed.
    pub async fn create_expecting_duplicate(&self, name: &str, acronym: &str) -> Result<String> {
        self.open_create_modal().await?;
        self.driver.fill(NAME_INPUT, name).await?;
        self.driver.fill(ACRONYM_INPUT, acronym).await?;
        self.driver.click(CREATE_BUTTON).await?;
        let message = bootbox_message(self.driver).await?;
        self.cancel_create_modal().await?;
        Ok(message)
    }

    pub async fn open_create_modal(&self) -> Result<()> {
        wait_until_visible(self.driver, ADD_BUTTON, WAIT).await?;
        self.driver.click(ADD_BUTTON).await?;
        wait_until_visible(self.driver, ADD_MODAL, WAIT).await
    }

    pub async fn cancel_create_modal(&self) -> Result<()> {
        self.driver.click(CANCEL_BUTTON).await?;
        self.driver
            .wait_for_selector(ADD_MODAL, WaitState::Hidden, WAIT)
            .await
    }

    /// Delete the named type through its row action and the confirmation
    /// modal.
    pub async fn delete_by_name(&self, name: &str) -> Result<()> {
        let count = self.driver.count(ROWS).await?;
        for i in 1..=count {
            let row = format!("{}:nth-child({})", ROWS, i);
            if self.driver.inner_text(&row).await?.contains(name) {
                let link = format!("{} {}", row, ROW_DELETE_LINK);
                self.driver.click(&link).await?;
                wait_until_visible(self.driver, DELETE_MODAL, WAIT).await?;
                self.driver.click(DELETE_CONFIRM).await?;
                self.driver
                    .wait_for_selector(DELETE_MODAL, WaitState::Hidden, WAIT)
                    .await?;
                return Ok(());
            }
        }
        Err(HarnessError::EntityNotFound {
            key: name.to_string(),
        })
    }
}
