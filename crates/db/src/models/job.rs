use devsite_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::tag::Tag;

/// A job as exposed to clients. The numeric id is deliberately absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub logo_filename: String,
    pub tags: Vec<Tag>,
}

/// Scalar columns selected from the `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub job_id: DbId,
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub logo_filename: String,
}

impl JobRow {
    pub fn into_job(self, tags: Vec<Tag>) -> Job {
        Job {
            company_name: self.company_name,
            title: self.title,
            description: self.description,
            logo_filename: self.logo_filename,
            tags,
        }
    }
}
