//! Repository for the `tags` table and its `project_tags` / `job_tags`
//! junction tables.

use std::collections::HashMap;

use devsite_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::tag::{OwnedTagRow, Tag};

/// Tags keyed by the owning project's name or job's company name.
pub type TagMap = HashMap<String, Vec<Tag>>;

pub struct TagRepo;

impl TagRepo {
    /// All project tags, grouped by project name.
    pub async fn by_project_name(pool: &MySqlPool) -> Result<TagMap, sqlx::Error> {
        let rows = sqlx::query_as::<_, OwnedTagRow>(
            "SELECT projects.name AS owner, tags.slug, tags.name, tags.postfix
             FROM projects
             INNER JOIN project_tags ON projects.project_id = project_tags.project_id
             INNER JOIN tags ON tags.tag_id = project_tags.tag_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(group_by_owner(rows))
    }

    /// All job tags, grouped by company name.
    ///
    /// Jobs sharing a company name share one entry.
    pub async fn by_company_name(pool: &MySqlPool) -> Result<TagMap, sqlx::Error> {
        let rows = sqlx::query_as::<_, OwnedTagRow>(
            "SELECT jobs.company_name AS owner, tags.slug, tags.name, tags.postfix
             FROM jobs
             INNER JOIN job_tags ON jobs.job_id = job_tags.job_id
             INNER JOIN tags ON tags.tag_id = job_tags.tag_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(group_by_owner(rows))
    }

    /// Tags attached to a single job.
    pub async fn for_job(pool: &MySqlPool, job_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT tags.slug, tags.name, tags.postfix
             FROM job_tags
             INNER JOIN tags ON tags.tag_id = job_tags.tag_id
             WHERE job_tags.job_id = ?",
        )
        .bind(job_id)
        .fetch_all(pool)
        .await
    }
}

/// Group joined rows by owner, preserving row order within each group.
pub fn group_by_owner(rows: Vec<OwnedTagRow>) -> TagMap {
    let mut map = TagMap::new();
    for row in rows {
        map.entry(row.owner).or_default().push(row.tag);
    }
    map
}
