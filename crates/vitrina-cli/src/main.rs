//! Vitrina CLI: run storefront admin UI regression checks.
//!
//! ## Usage
//!
//! ```bash
//! vitrina                              # Run the whole suite
//! vitrina --scenario admin_login       # Run one scenario
//! vitrina --config ci/vitrina.yaml -v  # Alternate config, verbose logs
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vitrina::{BrowserConfig, Runner, Scenario, Settings, VitrinaError, VitrinaResult};

mod output;

#[derive(Debug, Parser)]
#[command(
    name = "vitrina",
    version,
    about = "UI regression checks for the storefront admin"
)]
struct Cli {
    /// Path to the suite configuration file
    #[arg(long, default_value = "vitrina.yaml")]
    config: PathBuf,

    /// Run a single scenario by name (default: all)
    #[arg(long)]
    scenario: Option<String>,

    /// Override the screenshot directory
    #[arg(long)]
    screenshot_dir: Option<PathBuf>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Path to the chromium binary (auto-detected when unset)
    #[arg(long, env = "VITRINA_CHROMIUM_PATH")]
    chromium_path: Option<String>,

    /// Disable the chromium sandbox (containers/CI)
    #[arg(long)]
    no_sandbox: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "vitrina=error"
        } else {
            match self.verbose {
                0 => "vitrina=info",
                1 => "vitrina=debug",
                _ => "trace",
            }
        }
    }

    fn browser_config(&self) -> BrowserConfig {
        let mut config = BrowserConfig::default().with_headless(!self.headed);
        if let Some(ref path) = self.chromium_path {
            config = config.with_chromium_path(path.clone());
        }
        if self.no_sandbox {
            config = config.with_no_sandbox();
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins over the verbosity flags.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Run the requested scenarios; returns whether everything passed.
async fn run(cli: Cli) -> VitrinaResult<bool> {
    let mut settings = Settings::load(&cli.config)?;
    if let Some(ref dir) = cli.screenshot_dir {
        settings = settings.with_screenshot_dir(dir.clone());
    }

    let runner = Runner::new(settings, cli.browser_config());

    if let Some(ref name) = cli.scenario {
        let scenario =
            Scenario::from_name(name).ok_or_else(|| VitrinaError::UnknownScenario {
                name: name.clone(),
            })?;
        let report = runner.run(scenario).await?;
        output::print_report(&report);
        Ok(report.is_passed())
    } else {
        let suite = runner.run_all().await;
        output::print_suite(&suite);
        Ok(suite.all_passed())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vitrina"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("vitrina.yaml"));
        assert!(cli.scenario.is_none());
        assert!(!cli.headed);
        assert_eq!(cli.default_log_filter(), "vitrina=info");
    }

    #[test]
    fn test_verbosity_mapping() {
        let cli = Cli::try_parse_from(["vitrina", "-v"]).unwrap();
        assert_eq!(cli.default_log_filter(), "vitrina=debug");
        let cli = Cli::try_parse_from(["vitrina", "-vv"]).unwrap();
        assert_eq!(cli.default_log_filter(), "trace");
        let cli = Cli::try_parse_from(["vitrina", "--quiet"]).unwrap();
        assert_eq!(cli.default_log_filter(), "vitrina=error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vitrina", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_browser_config_flags() {
        let cli = Cli::try_parse_from([
            "vitrina",
            "--headed",
            "--no-sandbox",
            "--chromium-path",
            "/usr/bin/chromium",
        ])
        .unwrap();
        let config = cli.browser_config();
        assert!(!config.headless);
        assert!(!config.sandbox);
        assert_eq!(config.chromium_path.as_deref(), Some("/usr/bin/chromium"));
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let cli = Cli::try_parse_from(["vitrina", "--scenario", "checkout"]).unwrap();
        assert!(Scenario::from_name(cli.scenario.as_deref().unwrap()).is_none());
    }
}
