use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A prospect: one law firm worked through the sales pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Prospect {
    pub id: i32,
    pub nom_cabinet: String,
    pub contact_nom: String,
    pub contact_tel: Option<String>,
    pub contact_email: Option<String>,
    pub contact_linkedin: Option<String>,
    pub nb_clients_cabinet: Option<i32>,
    pub prix_discute: i32,
    pub stockage_go: Option<i32>,
    pub date_demo: NaiveDate,
    pub resume_demo: Option<String>,
    pub etape: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: a prospect plus its interaction count.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProspectSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub prospect: Prospect,
    pub nb_interactions: i64,
}

/// Payload for creating or updating a prospect.
#[derive(Debug, Clone, Deserialize)]
pub struct ProspectInput {
    pub nom_cabinet: String,
    pub contact_nom: String,
    pub contact_tel: Option<String>,
    pub contact_email: Option<String>,
    pub contact_linkedin: Option<String>,
    pub nb_clients_cabinet: Option<i32>,
    pub prix_discute: Option<i32>,
    pub stockage_go: Option<i32>,
    pub date_demo: NaiveDate,
    pub resume_demo: Option<String>,
    pub etape: Option<String>,
    pub notes: Option<String>,
}

impl Prospect {
    /// All prospects, newest activity first, with interaction counts.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProspectSummary>> {
        let prospects = sqlx::query_as::<_, ProspectSummary>(
            r#"
            SELECT p.*,
              (SELECT COUNT(*) FROM interactions WHERE prospect_id = p.id) AS nb_interactions
            FROM prospects p
            ORDER BY p.updated_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(prospects)
    }

    /// Prospects at one pipeline stage, newest activity first.
    pub async fn list_by_etape(etape: &str, pool: &PgPool) -> Result<Vec<Self>> {
        let prospects = sqlx::query_as::<_, Self>(
            "SELECT * FROM prospects WHERE etape = $1 ORDER BY updated_at DESC",
        )
        .bind(etape)
        .fetch_all(pool)
        .await?;
        Ok(prospects)
    }

    /// Find one prospect by id.
    pub async fn find(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        let prospect = sqlx::query_as::<_, Self>("SELECT * FROM prospects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(prospect)
    }

    /// Create a prospect, returns the new id.
    pub async fn create(input: &ProspectInput, pool: &PgPool) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO prospects (nom_cabinet, contact_nom, contact_tel, contact_email, contact_linkedin,
                                   nb_clients_cabinet, prix_discute, stockage_go, date_demo, resume_demo, etape, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&input.nom_cabinet)
        .bind(&input.contact_nom)
        .bind(&input.contact_tel)
        .bind(&input.contact_email)
        .bind(&input.contact_linkedin)
        .bind(input.nb_clients_cabinet)
        .bind(input.prix_discute.unwrap_or(0))
        .bind(input.stockage_go)
        .bind(input.date_demo)
        .bind(&input.resume_demo)
        .bind(input.etape.as_deref().unwrap_or("demo_faite"))
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Full-record update; bumps `updated_at`. An absent stage keeps the
    /// current one.
    pub async fn update(id: i32, input: &ProspectInput, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE prospects
            SET nom_cabinet = $1, contact_nom = $2, contact_tel = $3, contact_email = $4, contact_linkedin = $5,
                nb_clients_cabinet = $6, prix_discute = $7, stockage_go = $8, date_demo = $9, resume_demo = $10,
                etape = COALESCE($11, etape), notes = $12, updated_at = CURRENT_TIMESTAMP
            WHERE id = $13
            "#,
        )
        .bind(&input.nom_cabinet)
        .bind(&input.contact_nom)
        .bind(&input.contact_tel)
        .bind(&input.contact_email)
        .bind(&input.contact_linkedin)
        .bind(input.nb_clients_cabinet)
        .bind(input.prix_discute.unwrap_or(0))
        .bind(input.stockage_go)
        .bind(input.date_demo)
        .bind(&input.resume_demo)
        .bind(&input.etape)
        .bind(&input.notes)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Stage transition; bumps `updated_at`.
    pub async fn update_etape(id: i32, etape: &str, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE prospects SET etape = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2")
            .bind(etape)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a prospect; its interactions cascade.
    pub async fn delete(id: i32, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM prospects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
