//! Scenario runner for the storefront admin suite.
//!
//! Each scenario runs to a terminal PASSED or FAILED outcome inside its own
//! browser session. The runner owns the session lifecycle: the session is
//! closed on every exit path — pass, title mismatch, or driver error — so
//! scenario code cannot leak a browser instance.

use crate::browser::{BrowserConfig, Page};
use crate::capture;
use crate::config::Settings;
use crate::page_object::LoginPage;
use crate::result::VitrinaResult;
use crate::session::Session;
use crate::wait;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Expected title of the admin login page
pub const HOME_PAGE_TITLE: &str = "nopCommerce demo store. Login";

/// Expected title of the post-login dashboard
pub const DASHBOARD_TITLE: &str = "Dashboard / nopCommerce administration";

/// The scenarios this suite knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Navigate to the login page and verify its title
    HomePageTitle,
    /// Log in with configured credentials and verify the dashboard title
    AdminLogin,
}

impl Scenario {
    /// All scenarios, in suite execution order
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::HomePageTitle, Self::AdminLogin]
    }

    /// Look up a scenario by name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home_page_title" => Some(Self::HomePageTitle),
            "admin_login" => Some(Self::AdminLogin),
            _ => None,
        }
    }

    /// Scenario name used in reports and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HomePageTitle => "home_page_title",
            Self::AdminLogin => "admin_login",
        }
    }

    /// Artifact tag; failure screenshots are written as `<tag>.png`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::HomePageTitle => "test_homePageTitle",
            Self::AdminLogin => "test_login",
        }
    }

    /// Title the scenario expects, compared by exact string equality
    #[must_use]
    pub const fn expected_title(self) -> &'static str {
        match self {
            Self::HomePageTitle => HOME_PAGE_TITLE,
            Self::AdminLogin => DASHBOARD_TITLE,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Terminal state of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Observed title matched the expected literal
    Passed,
    /// Title mismatch or driver error
    Failed,
}

/// Outcome of one scenario invocation
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: &'static str,
    /// Terminal state
    pub status: ScenarioStatus,
    /// Failure message, if any
    pub error: Option<String>,
    /// Wall-clock duration
    pub duration: Duration,
}

impl ScenarioReport {
    /// Create a passing report
    #[must_use]
    pub const fn passed(name: &'static str, duration: Duration) -> Self {
        Self {
            name,
            status: ScenarioStatus::Passed,
            error: None,
            duration,
        }
    }

    /// Create a failing report
    #[must_use]
    pub fn failed(name: &'static str, error: impl Into<String>, duration: Duration) -> Self {
        Self {
            name,
            status: ScenarioStatus::Failed,
            error: Some(error.into()),
            duration,
        }
    }

    /// Whether the scenario passed
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == ScenarioStatus::Passed
    }
}

/// Results from running the suite
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Individual scenario results
    pub results: Vec<ScenarioReport>,
    /// Total duration
    pub duration: Duration,
}

impl SuiteReport {
    /// Whether every scenario passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(ScenarioReport::is_passed)
    }

    /// Number of passing scenarios
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    /// Number of failing scenarios
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }
}

/// Runs scenarios against one configured storefront.
///
/// Settings and browser configuration are injected at construction; the
/// runner holds no other state, so repeated runs are independent.
#[derive(Debug, Clone)]
pub struct Runner {
    settings: Settings,
    browser: BrowserConfig,
}

impl Runner {
    /// Create a runner from suite settings and a browser configuration
    #[must_use]
    pub const fn new(settings: Settings, browser: BrowserConfig) -> Self {
        Self { settings, browser }
    }

    /// The settings this runner was built with
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one scenario inside its own browser session.
    ///
    /// A title mismatch is reported as a FAILED result (with screenshot and
    /// error log); a driver-level error is returned as `Err`. The session
    /// is closed in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be opened or a driver call
    /// fails mid-scenario (e.g. a locator does not resolve).
    pub async fn run(&self, scenario: Scenario) -> VitrinaResult<ScenarioReport> {
        let started = Instant::now();
        info!(scenario = scenario.name(), "scenario started");

        let mut session = Session::open(self.browser.clone()).await?;

        let outcome = match self.drive(session.page_mut(), scenario).await {
            Ok(()) => {
                wait::wait_for_title(
                    session.page(),
                    scenario.expected_title(),
                    self.settings.wait.options(),
                )
                .await
            }
            Err(e) => Err(e),
        };

        let result = match outcome {
            Ok(title) if title == scenario.expected_title() => {
                info!(scenario = scenario.name(), "scenario passed");
                Ok(ScenarioReport::passed(scenario.name(), started.elapsed()))
            }
            Ok(title) => {
                let message = format!(
                    "expected title {:?}, observed {title:?}",
                    scenario.expected_title()
                );
                capture::capture_failure(
                    session.page(),
                    &self.settings.screenshot_dir,
                    scenario.tag(),
                    &message,
                )
                .await;
                Ok(ScenarioReport::failed(
                    scenario.name(),
                    message,
                    started.elapsed(),
                ))
            }
            Err(e) => {
                error!(scenario = scenario.name(), error = %e, "scenario aborted");
                Err(e)
            }
        };

        if let Err(e) = session.close().await {
            warn!(scenario = scenario.name(), error = %e, "browser session did not close cleanly");
        }

        result
    }

    /// Run all scenarios sequentially.
    ///
    /// A scenario that aborts with a driver error is recorded as FAILED in
    /// the suite report; it does not stop the remaining scenarios.
    pub async fn run_all(&self) -> SuiteReport {
        let started = Instant::now();
        let mut results = Vec::new();

        for scenario in Scenario::all() {
            let scenario_started = Instant::now();
            let report = match self.run(scenario).await {
                Ok(report) => report,
                Err(e) => ScenarioReport::failed(
                    scenario.name(),
                    e.to_string(),
                    scenario_started.elapsed(),
                ),
            };
            results.push(report);
        }

        SuiteReport {
            results,
            duration: started.elapsed(),
        }
    }

    /// Perform the scenario's UI interactions, up to but not including the
    /// title assertion.
    async fn drive(&self, page: &mut Page, scenario: Scenario) -> VitrinaResult<()> {
        page.goto(&self.settings.base_url).await?;

        if scenario == Scenario::AdminLogin {
            let login = LoginPage::new();
            login
                .login(page, &self.settings.admin_email, &self.settings.admin_password)
                .await?;
        }

        Ok(())
    }
}
