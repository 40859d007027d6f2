use std::collections::{BTreeMap, HashMap};

use axum::Json;
use serde::Deserialize;

use crate::common::ApiError;
use crate::domains::templates::{self, Template};

#[derive(Debug, Deserialize)]
pub struct FillRequest {
    #[serde(rename = "templateKey")]
    pub template_key: String,
    #[serde(default)]
    pub variables: HashMap<String, Option<String>>,
}

/// The full template catalog, keyed by identifier.
pub async fn list_templates() -> Json<&'static BTreeMap<&'static str, Template>> {
    Json(templates::catalog())
}

/// Fill a template's placeholders with the supplied variables.
pub async fn fill_template(
    Json(payload): Json<FillRequest>,
) -> Result<Json<Template>, ApiError> {
    templates::fill(&payload.template_key, &payload.variables)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Template non trouvé".to_string()))
}
