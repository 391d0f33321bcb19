//! Create-user form

use jorani_harness::{wait_until_visible, Driver, Result};

use super::WAIT;

const FIRSTNAME: &str = "#firstname";
const LASTNAME: &str = "#lastname";
const LOGIN: &str = "#login";
const EMAIL: &str = "#email";
const SET_PASSWORD_TOGGLE: &str = "#cmdSelfManager";
const PASSWORD: &str = "#password";
const SEND: &str = "#send";

pub struct CreateUserPage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> CreateUserPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    /// Fill the form, set the password explicitly, and submit. Lands back
    /// on the user list.
    pub async fn create(&self, user: &crate::data::UserRecord) -> Result<()> {
        wait_until_visible(self.driver, FIRSTNAME, WAIT).await?;
        self.driver.fill(FIRSTNAME, &user.firstname).await?;
        self.driver.fill(LASTNAME, &user.lastname).await?;
        self.driver.fill(LOGIN, &user.login).await?;
        self.driver.fill(EMAIL, &user.email).await?;
        self.driver.click(SET_PASSWORD_TOGGLE).await?;
        wait_until_visible(self.driver, PASSWORD, WAIT).await?;
        self.driver.fill(PASSWORD, &user.password).await?;
        self.driver.click(SEND).await?;
        self.driver.wait_for_url("**/users", WAIT).await
    }
}
