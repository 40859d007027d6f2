use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

/// One aggregate row over the whole pipeline: total and per-stage counts,
/// signed revenue and the value still in play.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PipelineStats {
    pub total: i64,
    pub demo_faite: i64,
    pub relance_1: i64,
    pub relance_2: i64,
    pub relance_3: i64,
    pub relance_4: i64,
    pub relance_5: i64,
    pub signe: i64,
    pub perdu: i64,
    pub revenue_signe: i64,
    pub pipeline_actif: i64,
}

impl PipelineStats {
    pub async fn compute(pool: &PgPool) -> Result<Self> {
        let stats = sqlx::query_as::<_, Self>(
            r#"
            SELECT
              COUNT(*) AS total,
              COALESCE(SUM(CASE WHEN etape = 'demo_faite' THEN 1 ELSE 0 END), 0) AS demo_faite,
              COALESCE(SUM(CASE WHEN etape = 'relance_1' THEN 1 ELSE 0 END), 0) AS relance_1,
              COALESCE(SUM(CASE WHEN etape = 'relance_2' THEN 1 ELSE 0 END), 0) AS relance_2,
              COALESCE(SUM(CASE WHEN etape = 'relance_3' THEN 1 ELSE 0 END), 0) AS relance_3,
              COALESCE(SUM(CASE WHEN etape = 'relance_4' THEN 1 ELSE 0 END), 0) AS relance_4,
              COALESCE(SUM(CASE WHEN etape = 'relance_5' THEN 1 ELSE 0 END), 0) AS relance_5,
              COALESCE(SUM(CASE WHEN etape = 'signe' THEN 1 ELSE 0 END), 0) AS signe,
              COALESCE(SUM(CASE WHEN etape = 'perdu' THEN 1 ELSE 0 END), 0) AS perdu,
              COALESCE(SUM(CASE WHEN etape = 'signe' THEN prix_discute ELSE 0 END), 0) AS revenue_signe,
              COALESCE(SUM(CASE WHEN etape NOT IN ('perdu', 'signe') THEN prix_discute ELSE 0 END), 0) AS pipeline_actif
            FROM prospects
            "#,
        )
        .fetch_one(pool)
        .await?;
        Ok(stats)
    }
}

/// Count and discussed value per active stage (signed and lost excluded).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EtapePipeline {
    pub etape: String,
    pub count: i64,
    pub value: i64,
}

impl EtapePipeline {
    pub async fn compute(pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT
              etape,
              COUNT(*) AS count,
              COALESCE(SUM(prix_discute), 0) AS value
            FROM prospects
            WHERE etape NOT IN ('signe', 'perdu')
            GROUP BY etape
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
