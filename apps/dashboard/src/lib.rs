//! # Agri Dashboard
//!
//! Composition root: wires configuration, logging, the store and the data
//! layer together, then prints an overview of every collection.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Agri Dashboard                                   │
//! │                                                                         │
//! │  main.rs ────► run(args)                                               │
//! │                   │                                                     │
//! │                   ├── Options::parse      --config, --json, --help     │
//! │                   ├── DashboardConfig::load                            │
//! │                   ├── init_tracing         EnvFilter                   │
//! │                   ├── Store::new(config.store, SeedData::sample())     │
//! │                   ├── DataLayer::new(store)                            │
//! │                   └── Overview::collect ──► stdout                     │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   agri-core      │  │   agri-store     │  │   agri-client        │  │
//! │  │   (types, query) │  │   (collections)  │  │   (fetch state)      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is global: the store is built here and handed down explicitly.

pub mod config;
pub mod error;
pub mod report;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use agri_client::DataLayer;
use agri_store::{SeedData, Store};

pub use config::DashboardConfig;
pub use error::{AppError, AppResult};
pub use report::Overview;

const USAGE: &str = "\
Usage: agri-dashboard [OPTIONS]

Options:
  --config <PATH>  Read configuration from PATH instead of the default location
  --json           Print the overview as JSON
  -h, --help       Print this help

Environment:
  AGRI_LATENCY        simulated | instant
  AGRI_LATENCY_SCALE  multiplier for the simulated delays
  AGRI_IDS            sequential | uuid
  AGRI_PAGE_SIZE      rows per management list page
  AGRI_LOG            tracing filter (RUST_LOG is used when unset)
";

// =============================================================================
// Command Line
// =============================================================================

/// Parsed command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

impl Options {
    /// Parses flags, without the program name.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config needs a path".to_string()))?;
                    options.config = Some(PathBuf::from(path));
                }
                "--json" => options.json = true,
                "-h" | "--help" => options.help = true,
                other => {
                    return Err(AppError::Usage(format!(
                        "unknown argument '{other}'\n\n{USAGE}"
                    )))
                }
            }
        }

        Ok(options)
    }
}

// =============================================================================
// Startup
// =============================================================================

/// Runs the dashboard with the given arguments.
pub async fn run<I>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = String>,
{
    let options = Options::parse(args)?;
    if options.help {
        print!("{USAGE}");
        return Ok(());
    }

    let config = DashboardConfig::load(options.config)?;
    init_tracing(&config);

    info!(
        latency = ?config.store.latency,
        latency_scale = config.store.latency_scale,
        ids = ?config.store.ids,
        page_size = config.view.page_size,
        "Starting Agri Dashboard"
    );

    let store = Store::new(config.store.clone(), SeedData::sample());
    let data = DataLayer::new(store);

    let today = chrono::Local::now().date_naive();
    let overview = Overview::collect(&data, &config.view, today).await?;

    if options.json {
        println!("{}", overview.to_json()?);
    } else {
        print!("{overview}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Filter Source
/// - `AGRI_LOG` (already folded into the config)
/// - `RUST_LOG` when `AGRI_LOG` is unset
/// - the config file's `[logging] filter`
///
/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(config: &DashboardConfig) {
    let directives = match (std::env::var("AGRI_LOG"), std::env::var("RUST_LOG")) {
        (Err(_), Ok(rust_log)) => rust_log,
        _ => config.logging.filter.clone(),
    };
    let filter = EnvFilter::try_new(&directives)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let options = Options::parse(args(&["--json", "--config", "/tmp/d.toml"])).unwrap();
        assert!(options.json);
        assert!(!options.help);
        assert_eq!(options.config, Some(PathBuf::from("/tmp/d.toml")));

        assert_eq!(Options::parse(args(&[])).unwrap(), Options::default());
        assert!(Options::parse(args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Options::parse(args(&["--config"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            Options::parse(args(&["--verbose"])),
            Err(AppError::Usage(_))
        ));
    }

    #[tokio::test]
    async fn test_help_short_circuits() {
        assert!(run(args(&["--help"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_bad_config_file_fails() {
        let path = std::env::temp_dir().join(format!("agri-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[view]\npage_size = 0\n").unwrap();

        let result = run(args(&["--config", path.to_str().unwrap()])).await;
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
