//! Repository for the `projects` table.

use sqlx::MySqlPool;

use crate::models::project::{Project, ProjectRow};
use crate::repositories::TagRepo;

/// Column list for project queries.
const COLUMNS: &str = "name, description, project_link1, project_link1_title, \
     project_link2, project_link2_title, hosted_link, hosted_title";

pub struct ProjectRepo;

impl ProjectRepo {
    /// List every project with its tags, in database order.
    ///
    /// Projects without tag associations get an empty list.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Project>, sqlx::Error> {
        let tags = TagRepo::by_project_name(pool).await?;

        let query = format!("SELECT {COLUMNS} FROM projects");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let project_tags = tags.get(&row.name).cloned().unwrap_or_default();
                row.into_project(project_tags)
            })
            .collect())
    }
}
