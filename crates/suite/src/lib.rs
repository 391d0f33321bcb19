//! End-to-end suite for a Jorani leave-management instance
//!
//! Layered on `jorani-harness`:
//!
//! ```text
//!   tests/            scenarios, request fixtures by name
//!      |
//!   fixtures          entity lifecycles (create -> yield key -> remove)
//!      |
//!   pages/            one page object per screen, locators stay here
//!      |
//!   session, config   authenticated driver handle + environment knobs
//! ```
//!
//! Tests talk to page objects and fixtures only; no selector or polling
//! loop appears at the test level.

pub mod config;
pub mod data;
pub mod fixtures;
pub mod pages;
pub mod session;

pub use config::{init_tracing, SuiteConfig};
pub use session::Session;
