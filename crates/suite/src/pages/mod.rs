//! Page objects for the Jorani screens
//!
//! One module per logical screen. Each page object holds nothing beyond
//! the driver handle and its locators, exposes operations named for
//! intent, and composes the stable-read primitives instead of polling
//! inline. Locator changes in the application stay inside this module
//! tree.

use std::time::Duration;

use jorani_harness::{wait_until_visible, Driver, Result, WaitState};

mod create_user;
mod extras;
mod home;
mod leave_request;
mod leave_types;
mod leaves;
mod login;
mod overtime;
mod overtime_request;
mod requests;
mod users;

pub use create_user::CreateUserPage;
pub use extras::ExtrasPage;
pub use home::HomePage;
pub use leave_request::LeaveRequestPage;
pub use leave_types::LeaveTypesPage;
pub use leaves::LeavesPage;
pub use login::LoginPage;
pub use overtime::OvertimePage;
pub use overtime_request::OvertimeRequestPage;
pub use requests::RequestsPage;
pub use users::UsersPage;

/// Default wait for visibility and navigation.
pub(crate) const WAIT: Duration = Duration::from_secs(10);

/// Shorter wait for transient elements like the flash banner.
pub(crate) const FLASH_WAIT: Duration = Duration::from_secs(5);

/// The flash/notification banner shown after most actions.
pub(crate) const FLASHBOX: &str = "#flashbox";

/// Body and dismiss button of a bootbox validation modal.
pub(crate) const BOOTBOX_MODAL: &str = ".bootbox.modal.fade.in";
pub(crate) const BOOTBOX_BODY: &str = ".bootbox.modal.fade.in .modal-body";
pub(crate) const BOOTBOX_OK: &str = ".bootbox.modal.fade.in .btn-primary";

/// Wait for the flash banner and return its trimmed text. A missing
/// banner surfaces as a typed `ElementNotFound`, never as an empty string.
pub(crate) async fn flash_message(driver: &dyn Driver) -> Result<String> {
    wait_until_visible(driver, FLASHBOX, FLASH_WAIT).await?;
    Ok(driver.inner_text(FLASHBOX).await?.trim().to_string())
}

/// Wait for a bootbox modal, return its trimmed body text, and dismiss it
/// so the UI is left clean.
pub(crate) async fn bootbox_message(driver: &dyn Driver) -> Result<String> {
    wait_until_visible(driver, BOOTBOX_MODAL, WAIT).await?;
    let message = driver.inner_text(BOOTBOX_BODY).await?.trim().to_string();
    driver.click(BOOTBOX_OK).await?;
    driver
        .wait_for_selector(BOOTBOX_MODAL, WaitState::Hidden, WAIT)
        .await?;
    Ok(message)
}

/// Drive a confirm-delete modal: wait for it, confirm, wait for it to go.
pub(crate) async fn confirm_modal(
    driver: &dyn Driver,
    modal: &str,
    confirm_button: &str,
) -> Result<()> {
    wait_until_visible(driver, modal, WAIT).await?;
    driver.click(confirm_button).await?;
    driver
        .wait_for_selector(modal, WaitState::Hidden, WAIT)
        .await?;
    Ok(())
}
