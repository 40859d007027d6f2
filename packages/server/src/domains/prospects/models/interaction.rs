use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// One follow-up touch on a prospect (email sent, call made, ...).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Interaction {
    pub id: i32,
    pub prospect_id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub date: DateTime<Utc>,
    pub canal: Option<String>,
    pub contenu: Option<String>,
    pub resultat: Option<String>,
}

/// Payload for recording an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionInput {
    pub prospect_id: i32,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub date: Option<DateTime<Utc>>,
    pub canal: Option<String>,
    pub contenu: Option<String>,
    pub resultat: Option<String>,
}

impl Interaction {
    /// Interactions for one prospect, newest first.
    pub async fn list_for_prospect(prospect_id: i32, pool: &PgPool) -> Result<Vec<Self>> {
        let interactions = sqlx::query_as::<_, Self>(
            "SELECT * FROM interactions WHERE prospect_id = $1 ORDER BY date DESC",
        )
        .bind(prospect_id)
        .fetch_all(pool)
        .await?;
        Ok(interactions)
    }

    /// Record an interaction; the date defaults to now.
    pub async fn create(input: &InteractionInput, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO interactions (prospect_id, type, date, canal, contenu, resultat)
            VALUES ($1, $2, COALESCE($3, CURRENT_TIMESTAMP), $4, $5, $6)
            "#,
        )
        .bind(input.prospect_id)
        .bind(&input.interaction_type)
        .bind(input.date)
        .bind(&input.canal)
        .bind(&input.contenu)
        .bind(&input.resultat)
        .execute(pool)
        .await?;
        Ok(())
    }
}
