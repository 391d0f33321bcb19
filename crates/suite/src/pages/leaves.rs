//! My-leave-requests list

use jorani_harness::{
    wait_until_visible, DataTable, Driver, Result, TableLocators, TableTiming,
};

use super::{confirm_modal, flash_message, WAIT};

const TABLE: TableLocators = TableLocators {
    table: "#leaves",
    rows: "#leaves tbody tr",
    filter_input: "#leaves_filter input",
    length_select: "#leaves_length select",
    next: "#leaves_next",
    info: "#leaves_info",
    empty_row: "#leaves tbody td.dataTables_empty",
};

const ROW_DELETE_LINK: &str = "a.confirm-delete";
const DELETE_MODAL: &str = "#frmDeleteLeaveRequest";
const DELETE_CONFIRM: &str = "#lnkDeleteUser";

pub struct LeavesPage<'d> {
    driver: &'d dyn Driver,
    table: DataTable<'d>,
}

impl<'d> LeavesPage<'d> {
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

    pub async fn row_texts(&self) -> Result<Vec<String>> {
        self.table.row_texts().await
    }

    pub async fn success_message(&self) -> Result<String> {
        flash_message(self.driver).await
    }

    /// Delete the first listed request through the confirmation modal.
    /// Callers filter first so "first" is the row they mean.
    pub async fn delete_first(&self) -> Result<()> {
        let link = format!("{}:nth-child(1) {}", TABLE.rows, ROW_DELETE_LINK);
        wait_until_visible(self.driver, &link, WAIT).await?;
        self.driver.click(&link).await?;
        confirm_modal(self.driver, DELETE_MODAL, DELETE_CONFIRM).await
    }

    /// Filter by the request's cause and delete the matching row.
    pub async fn delete_by_cause(&self, cause: &str) -> Result<()> {
        self.table.search(cause).await?;
        self.table.find_row_containing(cause).await?;
        self.delete_first().await?;
        self.table.search("").await?;
        Ok(())
    }
}
