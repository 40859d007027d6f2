use axum::extract::{Extension, Path};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::prospects::{Interaction, Prospect, ProspectInput, ProspectSummary};
use crate::server::app::AppState;

/// Detail payload: the prospect with its interaction history.
#[derive(Debug, Serialize)]
pub struct ProspectDetail {
    pub prospect: Prospect,
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Deserialize)]
pub struct EtapeUpdate {
    pub etape: String,
}

pub async fn list_prospects(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ProspectSummary>>, ApiError> {
    let prospects = Prospect::list(&state.db_pool).await?;
    Ok(Json(prospects))
}

pub async fn list_prospects_by_etape(
    Extension(state): Extension<AppState>,
    Path(etape): Path<String>,
) -> Result<Json<Vec<Prospect>>, ApiError> {
    let prospects = Prospect::list_by_etape(&etape, &state.db_pool).await?;
    Ok(Json(prospects))
}

pub async fn get_prospect(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProspectDetail>, ApiError> {
    let prospect = Prospect::find(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Prospect non trouvé".to_string()))?;
    let interactions = Interaction::list_for_prospect(id, &state.db_pool).await?;

    Ok(Json(ProspectDetail {
        prospect,
        interactions,
    }))
}

pub async fn create_prospect(
    Extension(state): Extension<AppState>,
    Json(input): Json<ProspectInput>,
) -> Result<Json<Value>, ApiError> {
    let id = Prospect::create(&input, &state.db_pool).await?;
    Ok(Json(
        json!({ "id": id, "message": "Prospect créé avec succès" }),
    ))
}

pub async fn update_prospect(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProspectInput>,
) -> Result<Json<Value>, ApiError> {
    Prospect::update(id, &input, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Prospect mis à jour" })))
}

pub async fn update_prospect_etape(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EtapeUpdate>,
) -> Result<Json<Value>, ApiError> {
    Prospect::update_etape(id, &payload.etape, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Étape mise à jour" })))
}

pub async fn delete_prospect(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    Prospect::delete(id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Prospect supprimé" })))
}
