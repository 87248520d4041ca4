//! Result and error types for Vitrina.

use thiserror::Error;

/// Result type for Vitrina operations
pub type VitrinaResult<T> = Result<T, VitrinaError>;

/// Errors that can occur while running a suite
#[derive(Debug, Error)]
pub enum VitrinaError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// An element locator failed to resolve
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// CSS representation of the selector that failed
        selector: String,
    },

    /// Screenshot error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// Configuration file path
        path: String,
        /// Error message
        message: String,
    },

    /// Unknown scenario name requested
    #[error("Unknown scenario: {name}")]
    UnknownScenario {
        /// Requested scenario name
        name: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
