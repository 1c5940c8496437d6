mod splash;

use anyhow::Context;
use ignite::kernel::config::load_bootstrap_config;
use ignite::prelude::*;
use ignite::telemetry::TracingSink;
use ignite_assets::AssetStore;
use ignite_logger::Logger;
use splash::ConsoleSplash;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

#[ignite_runtime::main(event_loop)]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config = load_bootstrap_config(config_path.as_deref())
        .context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let mut collaborators = Collaborators::default()
        .with_splash(Arc::new(ConsoleSplash))
        .with_telemetry(Arc::new(TracingSink));

    match AssetStore::builder().config(&config.assets).open().await {
        Ok(store) => {
            let store = Arc::new(store);
            collaborators = collaborators.with_fonts(store.clone()).with_assets(store);
        },
        Err(err) => warn!(error = %err, "Asset store unavailable; preloads become no-ops"),
    }

    let orchestrator = Orchestrator::from_config(&config, collaborators);
    let orchestrator = orchestrator.install().unwrap_or_else(|_| Orchestrator::global());

    orchestrator.initialize(config.initializer.clone()).await;
    orchestrator.hide_splash_screen().await;

    let metrics = orchestrator.initialization_metrics();
    info!(
        status = %orchestrator.initialization_status(),
        flags = ?orchestrator.runtime_flags(),
        errors = metrics.errors.len(),
        "Startup finished"
    );
    write_metrics(std::io::stdout().lock(), &metrics).context("Writing startup metrics")?;

    Ok(())
}

/// Dumps the run's metrics as pretty JSON, one document per line.
fn write_metrics(mut out: impl Write, metrics: &InitializationMetrics) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, metrics)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_dump_is_newline_terminated_json() {
        let mut metrics = InitializationMetrics::default();
        metrics.errors.push(ignite::domain::metrics::ErrorRecord::new("load_fonts", "offline"));

        let mut out = Vec::new();
        write_metrics(&mut out, &metrics).expect("write metrics");

        assert_eq!(out.last(), Some(&b'\n'));
        let parsed: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(parsed["errors"][0]["phase"], "load_fonts");
    }
}
