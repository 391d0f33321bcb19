//! User list screen
//!
//! The list is a DataTables widget; everything that reads it goes through
//! [`DataTable`] so redraws and stale pagination are handled in one place.

use jorani_harness::{
    wait_until_visible, DataTable, Driver, HarnessError, Result, TableLocators, TableTiming,
    WaitState,
};
use tracing::warn;

use super::{confirm_modal, flash_message, FLASH_WAIT, WAIT};

const TABLE: TableLocators = TableLocators {
    table: "#users",
    rows: "#users tbody tr",
    filter_input: "#users_filter input",
    length_select: "#users_length select",
    next: "#users_next",
    info: "#users_info",
    empty_row: "#users tbody td.dataTables_empty",
};

const ROW_DELETE_LINK: &str = "a.confirm-delete";
const EXPORT_LINK: &str = "a[href*=\"/users/export\"]";
const DELETE_MODAL: &str = "#frmConfirmDelete";
const DELETE_CONFIRM: &str = "#action-delete";
const AJAX_ERROR: &str = "#users_processing, .alert-error";

/// The seeded administrator; deleting it would lock the suite out.
const ADMIN_LOGIN: &str = "bbalet";

pub struct UsersPage<'d> {
    driver: &'d dyn Driver,
    table: DataTable<'d>,
}

impl<'d> UsersPage<'d> {
    pub fn new(driver: &'d dyn Driver) -> Self {
        Self {
            driver,
            table: DataTable::new(driver, TABLE),
        }
    }

    pub fn with_timing(driver: &'d dyn Driver, timing: TableTiming) -> Self {
        Self {
            driver,
            table: DataTable::new(driver, TABLE).with_timing(timing),
        }
    }

    pub async fn wait_for_table(&self) -> Result<()> {
        self.table.wait_for_rows().await
    }

    pub async fn search(&self, term: &str) -> Result<()> {
        self.table.search(term).await
    }

    pub async fn row_count(&self) -> Result<usize> {
        self.table.row_count().await
    }

    pub async fn table_data(&self) -> Result<Vec<String>> {
        self.table.row_texts().await
    }

    pub async fn set_page_length(&self, length: usize) -> Result<()> {
        self.table.set_page_length(length).await
    }

    pub async fn info_text(&self) -> Result<String> {
        self.table.info_text().await
    }

    pub async fn empty_message(&self) -> Result<String> {
        self.table.empty_message().await
    }

    pub async fn success_message(&self) -> Result<String> {
        flash_message(self.driver).await
    }

    /// Whether an account with this login is listed. Uses the filter so
    /// the lookup is one redraw instead of a page walk.
    pub async fn user_exists(&self, login: &str) -> Result<bool> {
        self.table.search(login).await?;
        let rows = self.table.row_texts().await?;
        let found = rows.iter().any(|row| row.contains(login));
        self.table.search("").await?;
        Ok(found)
    }

    /// Delete the account with this login through its row action and the
    /// confirmation modal. Refuses to touch the seeded administrator.
    pub async fn delete_by_login(&self, login: &str) -> Result<()> {
        if login == ADMIN_LOGIN {
            return Err(HarnessError::Assertion(format!(
                "refusing to delete the administrator account '{}'",
                login
            )));
        }

        self.table.search(login).await?;
        let row = self.table.find_row_containing(login).await?;
        let link = format!("{}:nth-child({}) {}", TABLE.rows, row, ROW_DELETE_LINK);
        wait_until_visible(self.driver, &link, WAIT).await?;
        self.driver.click(&link).await?;
        confirm_modal(self.driver, DELETE_MODAL, DELETE_CONFIRM).await?;
        self.table.search("").await?;
        Ok(())
    }

    /// Login shown in the last row of the final page. Used by cleanup to
    /// remove whatever account was created most recently.
    pub async fn last_listed_login(&self) -> Result<String> {
        self.table.go_to_last_page().await?;
        let count = self.table.row_count().await?;
        if count == 0 {
            return Err(HarnessError::EntityNotFound {
                key: "last user row".to_string(),
            });
        }
        Ok(self.table.cell_text(count, 3).await?.trim().to_string())
    }

    /// Export the list to a file saved under `dir`; returns the path.
    pub async fn export_list(&self, dir: &std::path::Path) -> Result<std::path::PathBuf> {
        self.driver.wait_for_download(EXPORT_LINK, dir, WAIT).await
    }

    /// Dismiss a lingering AJAX error overlay if one is up. Best-effort:
    /// absence is the normal case.
    pub async fn dismiss_ajax_error(&self) -> Result<()> {
        match self.driver.is_visible(AJAX_ERROR).await {
            Ok(true) => {
                if let Err(e) = self
                    .driver
                    .wait_for_selector(AJAX_ERROR, WaitState::Hidden, FLASH_WAIT)
                    .await
                {
                    warn!(error = %e, "ajax error overlay did not clear");
                }
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not check for ajax error overlay"),
        }
        Ok(())
    }
}
