//! Login screen

use jorani_harness::{wait_until_visible, Driver, Result};

use super::FLASH_WAIT;

const USERNAME_INPUT: &str = "#login";
const PASSWORD_INPUT: &str = "#password";
const SEND_BUTTON: &str = "#send";
const ERROR_MESSAGE: &str = "#flashbox, .alert, .alert-danger";

pub struct LoginPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> LoginPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    /// Submit the login form. The caller decides what navigation to wait
    /// for; wrong credentials keep the page on the login screen.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.driver.fill(USERNAME_INPUT, username).await?;
        self.driver.fill(PASSWORD_INPUT, password).await?;
        self.driver.click(SEND_BUTTON).await?;
        Ok(())
    }

    /// The error banner shown after a rejected login.
    pub async fn error_message(&self) -> Result<String> {
        wait_until_visible(self.driver, ERROR_MESSAGE, FLASH_WAIT).await?;
        Ok(self.driver.inner_text(ERROR_MESSAGE).await?.trim().to_string())
    }
}
