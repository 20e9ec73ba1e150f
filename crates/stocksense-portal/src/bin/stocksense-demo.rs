//! One login attempt against the demo portal.
//!
//! ```text
//! stocksense-demo <username> <password>
//! ```
//!
//! The security counter is kept under the configured `data_dir`, so repeated
//! runs walk through the lockout stages. Set `STOCKSENSE_CONFIG` to a JSON
//! config file to override the defaults, and `RUST_LOG` to change the log
//! filter.

use std::path::Path;
use std::process::ExitCode;

use stocksense_auth::LoginOutcome;
use stocksense_portal::{Navigator, Portal};
use stocksense_storage::{FileStore, MemoryStore};
use stocksense_types::constants::{PRODUCT_NAME, VERSION};
use stocksense_types::{LockStatus, StockSenseConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Prints navigation requests instead of performing them.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn alert(&mut self, message: &str) {
        println!("[alert] {message}");
    }

    fn redirect(&mut self, destination: &str) {
        println!("[redirect] {destination}");
    }
}

fn load_config() -> stocksense_types::Result<StockSenseConfig> {
    match std::env::var("STOCKSENSE_CONFIG") {
        Ok(path) => StockSenseConfig::load(Path::new(&path)),
        Err(_) => Ok(StockSenseConfig::default()),
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(username: &str, password: &str) -> stocksense_types::Result<bool> {
    let config = load_config()?;
    init_tracing(&config.log_level);

    let durable = FileStore::open(&config.storage.data_dir)?;
    let (mut portal, loaded) = Portal::open(durable, MemoryStore::new(), ConsoleNavigator, &config)?;
    if loaded.used_default() {
        tracing::info!(outcome = ?loaded, "starting with a fresh security counter");
    }

    println!("{PRODUCT_NAME} {VERSION}");
    let ok = match portal.login(username, password) {
        LoginOutcome::Authenticated(session) => {
            println!(
                "Welcome, {} ({}), session {}",
                session.display_name, session.role, session.session_id
            );
            let stats = portal.stats();
            println!(
                "Products {} | Low stock {} | Sales today {} | Orders {}",
                stats.products,
                stats.low_stock,
                portal.format_currency(stats.sales_today),
                stats.orders
            );
            for order in portal.orders(None) {
                let when = order.date.format("%Y-%m-%dT%H:%M:%S").to_string();
                println!(
                    "  {}  {:<18} {:>14}  {:<13} {}",
                    order.id,
                    order.customer,
                    portal.format_currency(order.total),
                    order.status.as_str(),
                    portal.format_date(&when)
                );
            }
            true
        }
        LoginOutcome::Rejected { message, .. } => {
            println!("Invalid username or password. {message}");
            false
        }
        LoginOutcome::Locked(LockStatus::PermanentlyLocked { .. }) => {
            println!("Account permanently locked. Contact IT support.");
            false
        }
        LoginOutcome::Locked(status) => {
            let left = status.remaining().map(|r| r.display()).unwrap_or_default();
            println!("Too many failed attempts. Try again in {left}.");
            false
        }
    };
    Ok(ok)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [username, password] = args.as_slice() else {
        eprintln!("usage: stocksense-demo <username> <password>");
        return ExitCode::from(2);
    };

    match run(username, password) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
