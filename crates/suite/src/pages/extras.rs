//! The employee's own overtime list
//!
//! Another DataTables widget. Row actions depend on the request status:
//! only a "Planned" request still carries a delete action, so removal
//! checks the status cell before touching the confirm modal.

use std::path::{Path, PathBuf};

use jorani_harness::{
    DataTable, Driver, HarnessError, Result, TableLocators, TableTiming,
};

use super::{confirm_modal, flash_message, WAIT};

const TABLE: TableLocators = TableLocators {
    table: "#extras",
    rows: "#extras tbody tr",
    filter_input: "#extras_filter input[type='search']",
    length_select: "select[name='extras_length']",
    next: "#extras_next",
    info: "#extras_info",
    empty_row: "#extras tbody td.dataTables_empty",
};

const STATUS_COLUMN: usize = 5;
const ID_COLUMN: usize = 1;

const DELETE_MODAL: &str = "#frmDeleteExtraRequest";
const DELETE_CONFIRM: &str = "#lnkDeleteUser";
const EXPORT_LINK: &str = "a[href*=\"/extra/export\"]";

pub struct ExtrasPage<'d> {
    driver: &'d dyn Driver,
    table: DataTable<'d>,
}

impl<'d> ExtrasPage<'d> {
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

    pub async fn row_texts(&self) -> Result<Vec<String>> {
        self.table.row_texts().await
    }

    pub async fn info_text(&self) -> Result<String> {
        self.table.info_text().await
    }

    pub async fn empty_message(&self) -> Result<String> {
        self.table.empty_message().await
    }

    pub async fn set_page_length(&self, length: usize) -> Result<()> {
        self.table.set_page_length(length).await
    }

    pub async fn success_message(&self) -> Result<String> {
        flash_message(self.driver).await
    }

    /// Status shown for the 1-based row on the current page.
    pub async fn status_of(&self, row: usize) -> Result<String> {
        Ok(self.table.cell_text(row, STATUS_COLUMN).await?.trim().to_string())
    }

    /// Id of the most recent request; the list sorts newest first.
    pub async fn latest_id(&self) -> Result<String> {
        Ok(self.table.cell_text(1, ID_COLUMN).await?.trim().to_string())
    }

    /// Delete the request with this id if it is still "Planned".
    ///
    /// Returns false when no row carries the id. A row in any other
    /// status has no delete action, so asking to remove it is a caller
    /// mistake, reported as a typed error rather than silently skipped.
    pub async fn delete_if_planned(&self, id: &str) -> Result<bool> {
        self.table.search(id).await?;
        let row = match self.table.find_row_containing(id).await {
            Ok(row) => row,
            Err(HarnessError::EntityNotFound { .. }) => {
                self.table.search("").await?;
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let status = self.status_of(row).await?;
        if !status.eq_ignore_ascii_case("planned") {
            self.table.search("").await?;
            return Err(HarnessError::Assertion(format!(
                "overtime request {} is '{}', only a planned request can be deleted",
                id, status
            )));
        }

        let link = format!("a.confirm-delete[data-id=\"{}\"]", id);
        self.driver.click(&link).await?;
        confirm_modal(self.driver, DELETE_MODAL, DELETE_CONFIRM).await?;
        self.table.search("").await?;
        Ok(true)
    }

    /// Export the list to a file saved under `dir`; returns the path.
    pub async fn export_list(&self, dir: &Path) -> Result<PathBuf> {
        self.driver.wait_for_download(EXPORT_LINK, dir, WAIT).await
    }
}
