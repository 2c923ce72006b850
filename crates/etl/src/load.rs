use std::{fs, path::Path};

use eyre::{Context as _, Result};
use log::{error, info};
use model::metrics::{MetricsSnapshot, SalesMetrics};
use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;
use storage::source::MetricsSink;

/// Stores `metrics`, then rewrites the local metrics file. The file is written
/// even when the store rejects the insert, without an id in that case.
pub async fn load(sink: &dyn MetricsSink, metrics: SalesMetrics, path: &Path) -> MetricsSnapshot {
    let id = match sink.insert_metrics(&metrics).await {
        Ok(id) => {
            info!("Metrics stored with id {}", id);
            Some(id)
        }
        Err(err) => {
            error!("An error occurred while loading data: {:#}", err);
            None
        }
    };
    let snapshot = MetricsSnapshot { id, metrics };
    if let Err(err) = write_snapshot(path, &snapshot) {
        error!("{:#}", err);
    }
    snapshot
}

pub fn write_snapshot(path: &Path, snapshot: &MetricsSnapshot) -> Result<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    snapshot
        .serialize(&mut serializer)
        .context("Failed to encode metrics")?;
    fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Metrics written to {}", path.display());
    Ok(())
}
