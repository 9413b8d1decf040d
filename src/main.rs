//! Kong route synchronizer entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kong_sync::config::Config;
use kong_sync::gateway::{Gateway, KongClient};
use kong_sync::routes::{FilterOptions, ManifestRouteSource, SortKey};
use kong_sync::sync::{run_sync, ResultLogger, SyncOutcome};

/// Kong route synchronizer.
#[derive(Parser, Debug)]
#[command(name = "kong-sync")]
#[command(about = "Synchronize application routes into Kong's admin API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    sync: SyncOpts,
}

/// Options for the sync pipeline.
#[derive(clap::Args, Debug, Clone)]
struct SyncOpts {
    /// Only include routes whose method list contains the substring.
    #[arg(long)]
    method: Option<String>,

    /// Only include routes whose name contains the substring.
    #[arg(long)]
    name: Option<String>,

    /// Only include routes whose URI contains the substring.
    #[arg(long)]
    path: Option<String>,

    /// Field to sort the listing by (host, method, uri, name, action, middleware).
    #[arg(long, default_value = "uri")]
    sort: SortKey,

    /// Reverse the sorted order.
    #[arg(short, long)]
    reverse: bool,

    /// Route manifest file (overrides ROUTES_MANIFEST).
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Print the registrations without calling the gateway.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synchronize application routes into the gateway (default).
    Sync {
        #[command(flatten)]
        opts: SyncOpts,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Query the gateway node status.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("kong_sync=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Status) => cmd_status().await,
        Some(Command::Sync { opts }) => cmd_sync(opts).await,
        None => cmd_sync(args.sync).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("KONG SYNC - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Admin Endpoint: {}", config.admin_url());
    println!("  Upstream App URL: {}", config.app_url);
    println!("  Route Manifest: {}", config.routes_manifest);
    println!("  Log Directory: {}", config.log_dir);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Query the gateway node status.
async fn cmd_status() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let client = KongClient::new(&config)?;

    println!("Checking gateway node at {} ...", client.admin_url());

    match client.node_status().await {
        Ok(200) => {
            println!("Gateway node is healthy (HTTP 200)");
            Ok(())
        }
        Ok(status) => {
            println!("Gateway node returned HTTP {}", status);
            Err(anyhow::anyhow!("gateway node unhealthy"))
        }
        Err(e) => {
            println!("Gateway node unreachable: {}", e);
            Err(e.into())
        }
    }
}

/// Synchronize application routes into the gateway.
async fn cmd_sync(opts: SyncOpts) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let manifest = opts
        .routes
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.routes_manifest));

    info!("Route manifest: {}", manifest.display());
    info!("Gateway admin endpoint: {}", config.admin_url());

    let source = ManifestRouteSource::new(manifest);
    let gateway = KongClient::new(&config)?;
    let logger = ResultLogger::new(&config.log_dir)?;

    let options = FilterOptions {
        method: opts.method,
        name: opts.name,
        path: opts.path,
        sort: opts.sort,
        reverse: opts.reverse,
    };

    let outcome = run_sync(
        &source,
        &gateway,
        &logger,
        &options,
        &config.app_url,
        opts.dry_run,
    )
    .await?;

    match outcome {
        SyncOutcome::NoRoutes => {
            eprintln!("Your application doesn't have any routes.");
        }
        SyncOutcome::DryRun { payloads, invalid } => {
            for payload in &payloads {
                println!(
                    "[dry-run] {} {} -> {} ({})",
                    payload.name, payload.uris, payload.upstream_url, payload.methods
                );
            }
            println!(
                "Dry run: {} payload(s) would be registered, {} route(s) skipped as invalid.",
                payloads.len(),
                invalid
            );
        }
        SyncOutcome::Published { payloads, invalid } => {
            for payload in &payloads {
                println!("Route {} added to gateway ({})", payload.name, payload.methods);
            }
            println!(
                "Synchronized {} payload(s); {} route(s) skipped as invalid.",
                payloads.len(),
                invalid
            );
        }
    }

    Ok(())
}
