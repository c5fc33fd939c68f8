//! Repository for the `jobs` table.

use devsite_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::job::{Job, JobRow};
use crate::repositories::TagRepo;

/// Column list for job queries.
const COLUMNS: &str = "job_id, company_name, title, description, logo_filename";

pub struct JobRepo;

impl JobRepo {
    /// List every job with its tags, in database order.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Job>, sqlx::Error> {
        let tags = TagRepo::by_company_name(pool).await?;

        let query = format!("SELECT {COLUMNS} FROM jobs");
        let rows = sqlx::query_as::<_, JobRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let job_tags = tags.get(&row.company_name).cloned().unwrap_or_default();
                row.into_job(job_tags)
            })
            .collect())
    }

    /// Find a job by its primary key, with its tags.
    ///
    /// Returns `Ok(None)` when no row matches; any other failure is an `Err`.
    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE job_id = ?");
        let Some(row) = sqlx::query_as::<_, JobRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let tags = TagRepo::for_job(pool, row.job_id).await?;
        Ok(Some(row.into_job(tags)))
    }
}
