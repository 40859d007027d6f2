use axum::extract::Extension;
use axum::Json;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::prospects::{Interaction, InteractionInput};
use crate::server::app::AppState;

pub async fn create_interaction(
    Extension(state): Extension<AppState>,
    Json(input): Json<InteractionInput>,
) -> Result<Json<Value>, ApiError> {
    Interaction::create(&input, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Interaction créée" })))
}
