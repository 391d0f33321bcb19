//! E2E harness for browser-driven test suites
//!
//! This crate provides the reusable core under the Jorani E2E suite:
//! - A fixture graph: named, interdependent setup/teardown units resolved
//!   per test execution, with guaranteed reverse-order teardown
//! - Stable-read primitives for polling an asynchronously rendered UI
//! - A driver abstraction over the browser automation engine, plus a
//!   Playwright-backed implementation
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Test Case (cargo test)                                    │
//! │    └── FixtureGraph::run(ctx, names, body)                 │
//! │          ├── resolve: cycle check, setup in dep order      │
//! │          ├── body: drives Page Objects                     │
//! │          └── teardown_all: reverse completion order        │
//! ├────────────────────────────────────────────────────────────┤
//! │  Page Objects (jorani-suite)                               │
//! │    └── DataTable / poll primitives                         │
//! │          └── dyn Driver                                    │
//! │                └── PlaywrightDriver (node subprocess)      │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod driver;
pub mod error;
pub mod fixture;
pub mod playwright;
pub mod poll;
pub mod table;

pub use driver::{Driver, WaitState};
pub use error::{HarnessError, Result};
pub use fixture::{FixtureDeps, FixtureGraph, FixtureRegistry, Phase, SetupOutcome};
pub use playwright::{Browser, PlaywrightConfig, PlaywrightDriver};
pub use poll::{collect_pages, poll_until_stable, wait_until_visible};
pub use table::{DataTable, TableLocators, TableTiming};

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
