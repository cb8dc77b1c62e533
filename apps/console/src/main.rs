//! # Inventario Console
//!
//! Terminal administration console for the Inventario backend.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: warn, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • config.toml + INVENTARIO_* env overrides                          │
//! │                                                                         │
//! │  3. Rehydrate Session ────────────────────────────────────────────────► │
//! │     • session.json from the platform data dir                           │
//! │     • absent/malformed → unauthenticated default                        │
//! │                                                                         │
//! │  4. Build Gateway ────────────────────────────────────────────────────► │
//! │     • reqwest client with timeouts, session injected                    │
//! │                                                                         │
//! │  5. Dispatch Subcommand ──────────────────────────────────────────────► │
//! │     • auth guard for everything except login/theme                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inventario_client::{ClientConfig, Gateway, SessionStore};

use commands::Context;

#[derive(Parser)]
#[command(name = "inventario")]
#[command(about = "Inventario administration console", version)]
struct Cli {
    /// Emit raw JSON instead of rendered tables
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        /// Prompted interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out (backend invalidation is best-effort)
    Logout,
    /// Show or update the authenticated profile
    Profile {
        #[command(subcommand)]
        command: Option<commands::auth::ProfileCommand>,
    },
    /// Headline counters, category breakdown and low-stock warnings
    Dashboard,
    /// Product catalog management
    Products {
        #[command(subcommand)]
        command: commands::products::ProductCommand,
    },
    /// Category management
    Categories {
        #[command(subcommand)]
        command: commands::categories::CategoryCommand,
    },
    /// Supplier management
    Suppliers {
        #[command(subcommand)]
        command: commands::suppliers::SupplierCommand,
    },
    /// Staff user management
    Users {
        #[command(subcommand)]
        command: commands::users::UserCommand,
    },
    /// Stock movement history and registration
    Stock {
        #[command(subcommand)]
        command: commands::stock::StockCommand,
    },
    /// Sales: list, detail, compose, cancel
    Sales {
        #[command(subcommand)]
        command: commands::sales::SaleCommand,
    },
    /// Inventory reports
    Reports {
        #[command(subcommand)]
        command: commands::reports::ReportCommand,
    },
    /// Toggle the dark-mode preference
    Theme,
}

impl Commands {
    /// Route guard: everything except login and the theme toggle requires an
    /// authenticated session.
    fn requires_auth(&self) -> bool {
        !matches!(self, Commands::Login { .. } | Commands::Logout | Commands::Theme)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let config = ClientConfig::load_or_default(None);
    let session_path = match config.session_path() {
        Some(path) => path,
        None => {
            eprintln!("Could not determine a data directory for the session file.");
            return ExitCode::FAILURE;
        }
    };

    let session = Arc::new(SessionStore::load(session_path));
    let gateway = match Gateway::new(&config, session) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("Failed to initialize the API gateway: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context {
        gateway,
        json: cli.json,
    };

    if cli.command.requires_auth() && !ctx.session().is_authenticated() {
        let theme = ctx.theme();
        eprintln!("{}", theme.err("Not logged in. Run `inventario login --email <email>` first."));
        return ExitCode::FAILURE;
    }

    let result = dispatch(&ctx, cli.command).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            render::report_error(&ctx.theme(), &e);
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(ctx: &Context, command: Commands) -> inventario_client::ApiResult<()> {
    match command {
        Commands::Login { email, password } => commands::auth::login(ctx, email, password).await,
        Commands::Logout => commands::auth::logout(ctx).await,
        Commands::Profile { command } => commands::auth::profile(ctx, command).await,
        Commands::Dashboard => commands::reports::dashboard(ctx).await,
        Commands::Products { command } => commands::products::run(ctx, command).await,
        Commands::Categories { command } => commands::categories::run(ctx, command).await,
        Commands::Suppliers { command } => commands::suppliers::run(ctx, command).await,
        Commands::Users { command } => commands::users::run(ctx, command).await,
        Commands::Stock { command } => commands::stock::run(ctx, command).await,
        Commands::Sales { command } => commands::sales::run(ctx, command).await,
        Commands::Reports { command } => commands::reports::run(ctx, command).await,
        Commands::Theme => commands::auth::toggle_theme(ctx),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show every gateway request/response
/// - `RUST_LOG=inventario=debug` - inventario crates only
/// - Default: warnings, so tables stay clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,inventario=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
