//! Paginated data-table reader
//!
//! Jorani renders its lists through DataTables widgets: a filter input, a
//! page-length select, a row body that redraws asynchronously after every
//! interaction, and a next control that may go stale. [`DataTable`] wraps
//! one such widget and composes the stable-read primitives so page objects
//! never poll inline.

use std::time::Duration;

use tracing::debug;

use crate::driver::Driver;
use crate::error::{HarnessError, Result};
use crate::poll::{collect_pages, poll_until_stable, wait_until_visible};

/// Selector set for one DataTables widget.
#[derive(Debug, Clone)]
pub struct TableLocators {
    /// The table element itself.
    pub table: &'static str,
    /// Body rows.
    pub rows: &'static str,
    /// Search/filter input.
    pub filter_input: &'static str,
    /// Page-length `<select>`.
    pub length_select: &'static str,
    /// Next-page control.
    pub next: &'static str,
    /// "Showing x to y of z" info line.
    pub info: &'static str,
    /// Placeholder row shown when the filter matches nothing.
    pub empty_row: &'static str,
}

/// Polling parameters shared by all table reads.
#[derive(Debug, Clone)]
pub struct TableTiming {
    pub max_attempts: usize,
    pub interval: Duration,
    pub visibility_timeout: Duration,
    /// Hard cap on pages visited; guards a next control that never disables.
    pub safety_bound: usize,
}

impl Default for TableTiming {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_millis(300),
            visibility_timeout: Duration::from_secs(10),
            safety_bound: 40,
        }
    }
}

/// Reader over one paginated table.
pub struct DataTable<'d> {
    driver: &'d dyn Driver,
    locators: TableLocators,
    timing: TableTiming,
}

impl<'d> DataTable<'d> {
    pub fn new(driver: &'d dyn Driver, locators: TableLocators) -> Self {
        Self {
            driver,
            locators,
            timing: TableTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: TableTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Wait for the row body to render.
    pub async fn wait_for_rows(&self) -> Result<()> {
        wait_until_visible(self.driver, self.locators.rows, self.timing.visibility_timeout).await
    }

    /// Number of rendered rows on the current page. The empty-filter
    /// placeholder counts as one row, matching what the widget renders.
    pub async fn row_count(&self) -> Result<usize> {
        self.driver.count(self.locators.rows).await
    }

    /// Text of every rendered row on the current page.
    pub async fn row_texts(&self) -> Result<Vec<String>> {
        let count = self.row_count().await?;
        let mut rows = Vec::with_capacity(count);
        for i in 1..=count {
            let selector = format!("{}:nth-child({})", self.locators.rows, i);
            rows.push(self.driver.inner_text(&selector).await?);
        }
        Ok(rows)
    }

    /// Text of one cell, 1-based row and column.
    pub async fn cell_text(&self, row: usize, col: usize) -> Result<String> {
        let selector = format!(
            "{}:nth-child({}) td:nth-child({})",
            self.locators.rows, row, col
        );
        self.driver.inner_text(&selector).await
    }

    /// The "Showing x to y of z" line.
    pub async fn info_text(&self) -> Result<String> {
        Ok(self.driver.inner_text(self.locators.info).await?.trim().to_string())
    }

    /// Text of the no-matching-records placeholder row.
    pub async fn empty_message(&self) -> Result<String> {
        Ok(self
            .driver
            .inner_text(self.locators.empty_row)
            .await?
            .trim()
            .to_string())
    }

    /// Type into the filter input, then wait out the redraw with a stable
    /// read over the full body text. Coarse on purpose: per-cell diffing
    /// would report stable while a late cell is still updating.
    pub async fn search(&self, term: &str) -> Result<()> {
        self.driver.fill(self.locators.filter_input, term).await?;
        self.settle_text().await?;
        Ok(())
    }

    /// Switch the page-length select and wait for the redraw.
    pub async fn set_page_length(&self, length: usize) -> Result<()> {
        self.driver
            .select_option(self.locators.length_select, &length.to_string())
            .await?;
        self.settle_text().await?;
        Ok(())
    }

    /// Advance to the next page. Returns false when there is no next page:
    /// the control is absent, hidden, disabled, or clicking it changed
    /// nothing (a stale next link on the final page).
    pub async fn advance(&self) -> Result<bool> {
        let next = self.locators.next;
        if self.driver.count(next).await? == 0 {
            return Ok(false);
        }
        if !self.driver.is_visible(next).await? {
            return Ok(false);
        }
        if let Some(class) = self.driver.attribute(next, "class").await? {
            if class.contains("disabled") {
                return Ok(false);
            }
        }

        // Raw markup snapshot around the click detects "no real page
        // change happened" even when the control still looks enabled.
        let before = self.driver.inner_html(self.locators.table).await?;
        self.driver.click(next).await?;
        let after = self.settle_markup().await?;
        Ok(after != before)
    }

    /// Walk to the final page. Bounded by the safety bound.
    pub async fn go_to_last_page(&self) -> Result<()> {
        for _ in 0..self.timing.safety_bound {
            if !self.advance().await? {
                return Ok(());
            }
        }
        debug!(bound = self.timing.safety_bound, "last-page walk hit safety bound");
        Ok(())
    }

    /// Row texts across every page, restarting from the current page.
    pub async fn all_row_texts(&self) -> Result<Vec<String>> {
        collect_pages(
            || self.row_texts(),
            || self.advance(),
            self.timing.safety_bound,
        )
        .await
    }

    /// Find the first row matching the predicate, advancing through pages
    /// as needed. Returns the 1-based row index on the page where it was
    /// found, leaving the table on that page so the caller can act on the
    /// row. Raises [`HarnessError::EntityNotFound`] once no further pages
    /// exist: this is "searched everything, genuinely absent", distinct
    /// from any timeout.
    pub async fn find_row<P>(&self, key: &str, predicate: P) -> Result<usize>
    where
        P: Fn(&str) -> bool,
    {
        for _ in 0..self.timing.safety_bound {
            let rows = self.row_texts().await?;
            for (i, row) in rows.iter().enumerate() {
                if predicate(row) {
                    return Ok(i + 1);
                }
            }
            if !self.advance().await? {
                break;
            }
        }
        Err(HarnessError::EntityNotFound {
            key: key.to_string(),
        })
    }

    /// Find the first row whose text contains the needle.
    pub async fn find_row_containing(&self, needle: &str) -> Result<usize> {
        self.find_row(needle, |row| row.contains(needle)).await
    }

    async fn settle_text(&self) -> Result<String> {
        let read = || self.driver.inner_text(self.locators.table);
        match poll_until_stable(read, self.timing.max_attempts, self.timing.interval).await {
            Ok(text) => Ok(text),
            // Last read is good enough for a redraw wait; the caller's
            // subsequent read does its own verification.
            Err(HarnessError::StabilityTimeout { .. }) => {
                self.driver.inner_text(self.locators.table).await
            }
            Err(e) => Err(e),
        }
    }

    async fn settle_markup(&self) -> Result<String> {
        let read = || self.driver.inner_html(self.locators.table);
        match poll_until_stable(read, self.timing.max_attempts, self.timing.interval).await {
            Ok(html) => Ok(html),
            Err(HarnessError::StabilityTimeout { .. }) => {
                self.driver.inner_html(self.locators.table).await
            }
            Err(e) => Err(e),
        }
    }
}
