use axum::extract::Extension;
use axum::Json;

use crate::common::ApiError;
use crate::domains::prospects::{EtapePipeline, PipelineStats};
use crate::server::app::AppState;

/// Aggregate counts and sums over the whole pipeline.
pub async fn stats_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<PipelineStats>, ApiError> {
    let stats = PipelineStats::compute(&state.db_pool).await?;
    Ok(Json(stats))
}

/// Count and value per active stage.
pub async fn pipeline_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<EtapePipeline>>, ApiError> {
    let pipeline = EtapePipeline::compute(&state.db_pool).await?;
    Ok(Json(pipeline))
}
