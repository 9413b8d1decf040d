//! The synchronization pipeline: read, filter, aggregate, publish, log.

use tracing::{info, warn};

use crate::error::{GatewayError, Result};
use crate::gateway::{aggregate, Gateway, GatewayPayload};
use crate::routes::{filter_routes, FilterOptions, RouteSource};

use super::logger::ResultLogger;

/// What a synchronization run produced.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// The application has no registered routes; nothing was attempted.
    NoRoutes,
    /// Dry run: payloads that would have been registered.
    DryRun {
        /// Payloads that would be sent.
        payloads: Vec<GatewayPayload>,
        /// Routes skipped as invalid.
        invalid: usize,
    },
    /// Payloads registered with the gateway.
    Published {
        /// Payloads sent, in order.
        payloads: Vec<GatewayPayload>,
        /// Routes skipped as invalid.
        invalid: usize,
    },
}

/// Run the full pipeline once.
///
/// Checks node health before touching the gateway or the log files; a
/// publish failure mid-loop aborts the remaining payloads without
/// rolling back the ones already registered.
pub async fn run_sync<S, G>(
    source: &S,
    gateway: &G,
    logger: &ResultLogger,
    options: &FilterOptions,
    app_url: &str,
    dry_run: bool,
) -> Result<SyncOutcome>
where
    S: RouteSource,
    G: Gateway + Sync,
{
    let routes = source.routes()?;

    if routes.is_empty() {
        warn!("route source returned no routes");
        return Ok(SyncOutcome::NoRoutes);
    }

    let filtered = filter_routes(&routes, options);
    let aggregation = aggregate(&filtered, app_url);

    info!(
        total = routes.len(),
        selected = filtered.len(),
        payloads = aggregation.valid.len(),
        invalid = aggregation.invalid.len(),
        "aggregated route listing"
    );

    if dry_run {
        return Ok(SyncOutcome::DryRun {
            payloads: aggregation.valid,
            invalid: aggregation.invalid.len(),
        });
    }

    let status = gateway.node_status().await?;
    if status != 200 {
        return Err(GatewayError::NodeUnhealthy { status }.into());
    }

    logger.write_invalid(&aggregation.invalid)?;

    let mut published = Vec::with_capacity(aggregation.valid.len());

    for payload in &aggregation.valid {
        let raw = gateway.upsert_api(payload).await?;
        logger.append_pushed(&raw)?;

        info!(name = %payload.name, methods = %payload.methods, "published route");
        published.push(payload.clone());
    }

    Ok(SyncOutcome::Published {
        payloads: published,
        invalid: aggregation.invalid.len(),
    })
}
