//! Overtime approval list

use jorani_harness::{wait_until_visible, Driver, Result};

use super::{flash_message, WAIT};

const ACCEPT_FIRST: &str = "a[title='accept']";
const REJECT_FIRST: &str = "a[title='reject']";

pub struct OvertimePage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> OvertimePage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    /// Accept the first pending overtime request and return the flash text.
    pub async fn accept_first(&self) -> Result<String> {
        wait_until_visible(self.driver, ACCEPT_FIRST, WAIT).await?;
        self.driver.click(ACCEPT_FIRST).await?;
        flash_message(self.driver).await
    }

    /// Reject the first pending overtime request and return the flash text.
    pub async fn reject_first(&self) -> Result<String> {
        wait_until_visible(self.driver, REJECT_FIRST, WAIT).await?;
        self.driver.click(REJECT_FIRST).await?;
        flash_message(self.driver).await
    }
}
