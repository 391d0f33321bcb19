//! Home screen and its dropdown menus
//!
//! Every navigation opens a dropdown, clicks the entry, and waits for the
//! destination URL, so callers land on a loaded screen.

use jorani_harness::{wait_until_visible, Driver, Result};

use super::WAIT;

const ADMIN_MENU: &str = "a.dropdown-toggle:has-text(\"Admin\")";
const REQUESTS_MENU: &str = "a.dropdown-toggle:has-text(\"Requests\")";
const APPROVAL_MENU: &str = "a.dropdown-toggle:has-text(\"Approval\")";

const CREATE_USER_LINK: &str = "a:has-text(\"Create user\")";
const USER_LIST_LINK: &str = "a:has-text(\"List of users\")";
const LEAVE_TYPES_LINK: &str = "a:has-text(\"List of types\")";
const CREATE_LEAVE_LINK: &str = "a:has-text(\"Request a Leave\")";
const LEAVE_LIST_LINK: &str = "a:has-text(\"List of leave requests\")";
const CREATE_OVERTIME_LINK: &str = "a:has-text(\"Request an Overtime\")";
const MY_OVERTIME_LINK: &str = "a[href$=\"/extra\"]";
const APPROVAL_LEAVES_LINK: &str = "a[href$=\"/requests\"]";
const APPROVAL_OVERTIME_LINK: &str = "a[href$=\"/overtime\"]";

pub struct HomePage<'d> {
    driver: &'d dyn Driver,
}

impl<'d> HomePage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self { driver }
    }

    pub async fn go_to_create_user(&self) -> Result<()> {
        self.open(ADMIN_MENU, CREATE_USER_LINK, "**/users/create").await
    }

    pub async fn go_to_user_list(&self) -> Result<()> {
        self.open(ADMIN_MENU, USER_LIST_LINK, "**/users").await
    }

    pub async fn go_to_leave_types(&self) -> Result<()> {
        self.open(ADMIN_MENU, LEAVE_TYPES_LINK, "**/leavetypes").await
    }

    pub async fn go_to_create_leave(&self) -> Result<()> {
        self.open(REQUESTS_MENU, CREATE_LEAVE_LINK, "**/leaves/create").await
    }

    pub async fn go_to_leave_list(&self) -> Result<()> {
        self.open(REQUESTS_MENU, LEAVE_LIST_LINK, "**/leaves").await
    }

    pub async fn go_to_create_overtime(&self) -> Result<()> {
        self.open(REQUESTS_MENU, CREATE_OVERTIME_LINK, "**/extras/create").await
    }

    pub async fn go_to_my_overtime(&self) -> Result<()> {
        self.open(REQUESTS_MENU, MY_OVERTIME_LINK, "**/extra").await
    }

    pub async fn go_to_requests(&self) -> Result<()> {
        self.open(APPROVAL_MENU, APPROVAL_LEAVES_LINK, "**/requests").await
    }

    pub async fn go_to_overtime_list(&self) -> Result<()> {
        self.open(APPROVAL_MENU, APPROVAL_OVERTIME_LINK, "**/overtime").await
    }

    async fn open(&self, menu: &str, link: &str, url_pattern: &str) -> Result<()> {
        wait_until_visible(self.driver, menu, WAIT).await?;
        self.driver.click(menu).await?;
        wait_until_visible(self.driver, link, WAIT).await?;
        self.driver.click(link).await?;
        self.driver.wait_for_url(url_pattern, WAIT).await
    }
}
