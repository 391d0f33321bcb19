//! Leave-request approval list

use jorani_harness::{wait_until_visible, Driver, Result, WaitState};

use super::{flash_message, WAIT};

const ACCEPT_FIRST: &str = ".lnkAccept";
const REJECT_FIRST: &str = ".lnkReject";
const REJECT_MODAL: &str = "#frmRejectComment";
const REJECT_COMMENT: &str = "#frmRejectComment textarea";
const REJECT_CONFIRM: &str = "#frmRejectComment .btn-primary";

pub struct RequestsPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> RequestsPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    /// Accept the first pending request and return the flash text.
    pub async fn accept_first(&self) -> Result<String> {
        wait_until_visible(self.driver, ACCEPT_FIRST, WAIT).await?;
        self.driver.click(ACCEPT_FIRST).await?;
        flash_message(self.driver).await
    }

    /// Reject the first pending request with a comment and return the
    /// flash text.
    pub async fn reject_first(&self, comment: &str) -> Result<String> {
        wait_until_visible(self.driver, REJECT_FIRST, WAIT).await?;
        self.driver.click(REJECT_FIRST).await?;
        wait_until_visible(self.driver, REJECT_MODAL, WAIT).await?;
        self.driver.fill(REJECT_COMMENT, comment).await?;
        self.driver.click(REJECT_CONFIRM).await?;
        self.driver
            .wait_for_selector(REJECT_MODAL, WaitState::Hidden, WAIT)
            .await?;
        flash_message(self.driver).await
    }
}
