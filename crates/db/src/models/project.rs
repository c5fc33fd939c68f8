use serde::Serialize;
use sqlx::FromRow;

use crate::models::tag::Tag;

/// A `(title, link)` pair attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub project_links: Vec<ProjectLink>,
    pub tags: Vec<Tag>,
}

/// Scalar columns selected from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub name: String,
    pub description: String,
    pub project_link1: Option<String>,
    pub project_link1_title: Option<String>,
    pub project_link2: Option<String>,
    pub project_link2_title: Option<String>,
    pub hosted_link: Option<String>,
    pub hosted_title: Option<String>,
}

impl ProjectRow {
    /// Assemble the client-facing project. Links are kept in column order
    /// (link 1, link 2, hosted). A pair is kept whenever its link is
    /// non-empty, even with an empty title; a NULL or empty link drops the
    /// pair, so clients receive up to three entries instead of always three.
    pub fn into_project(self, tags: Vec<Tag>) -> Project {
        let project_links = [
            (self.project_link1_title, self.project_link1),
            (self.project_link2_title, self.project_link2),
            (self.hosted_title, self.hosted_link),
        ]
        .into_iter()
        .filter_map(|(title, link)| link_pair(title, link))
        .collect();

        Project {
            name: self.name,
            description: self.description,
            project_links,
            tags,
        }
    }
}

fn link_pair(title: Option<String>, link: Option<String>) -> Option<ProjectLink> {
    let link = link.filter(|l| !l.is_empty())?;
    Some(ProjectLink {
        title: title.unwrap_or_default(),
        link,
    })
}
