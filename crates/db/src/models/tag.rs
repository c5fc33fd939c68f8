use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tags` table as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Tag {
    pub slug: String,
    pub name: String,
    pub postfix: String,
}

/// A tag joined to the project or job that carries it.
///
/// `owner` is the project name or the company name, depending on the query.
#[derive(Debug, Clone, FromRow)]
pub struct OwnedTagRow {
    pub owner: String,
    #[sqlx(flatten)]
    pub tag: Tag,
}
