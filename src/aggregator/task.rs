use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::aggregator::{AggregationResult, Aggregator};
use crate::error::Result;
use crate::fs::FileSystem;

impl<F> Aggregator<F>
where
    F: FileSystem + Clone + Send + 'static,
{
    /// Runs [`Aggregator::aggregate_paths`] on tokio's blocking pool.
    ///
    /// The walk itself stays sequential, so the result is identical to the
    /// synchronous call.
    #[instrument(level = "debug", skip_all, fields(entries = paths.len()))]
    pub async fn aggregate_paths_async(&self, paths: Vec<PathBuf>) -> Result<AggregationResult> {
        let aggregator = self.clone();
        debug!("Spawning blocking aggregation task");
        let result =
            tokio::task::spawn_blocking(move || aggregator.aggregate_paths(paths.as_slice()))
                .await?;
        Ok(result)
    }
}
