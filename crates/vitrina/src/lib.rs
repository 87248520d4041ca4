//! Vitrina: UI regression checks for a storefront admin.
//!
//! Vitrina drives a real browser through the admin login flow of a
//! storefront and asserts on page titles, capturing a screenshot and an
//! error log record when an assertion fails.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Vitrina Architecture                     │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────┐   ┌────────────┐   ┌───────┐ │
//! │  │ Settings │──►│ Scenario │──►│ Page       │──►│ CDP   │ │
//! │  │ (YAML)   │   │ Runner   │   │ Objects    │   │ Page  │ │
//! │  └──────────┘   └────┬─────┘   └────────────┘   └───────┘ │
//! │                      │ on mismatch                         │
//! │                      ▼                                     │
//! │                ┌───────────┐                               │
//! │                │ Failure   │  screenshot + error log       │
//! │                │ Capture   │                               │
//! │                └───────────┘                               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Compile with the `browser` feature for real Chromium control; without
//! it the browser layer is a scripted fake used by the unit tests.

#![warn(missing_docs)]

/// Browser control (CDP via chromiumoxide, or a scripted fake)
pub mod browser;

/// Failure capture: screenshots and error log records
pub mod capture;

/// Suite configuration
pub mod config;

/// Locators and selectors
pub mod locator;

/// Page objects for the storefront admin
pub mod page_object;

mod result;

/// Scenario runner and suite reports
pub mod scenario;

/// Scoped browser session lifecycle
pub mod session;

/// Bounded wait mechanisms
pub mod wait;

pub use browser::{Browser, BrowserConfig, Page};
pub use config::Settings;
pub use locator::{Locator, Selector};
pub use page_object::{LoginPage, PageObject};
pub use result::{VitrinaError, VitrinaResult};
pub use scenario::{Runner, Scenario, ScenarioReport, ScenarioStatus, SuiteReport};
pub use session::Session;
pub use wait::WaitOptions;
