/// Primary keys of the `projects`, `jobs` and `tags` tables.
pub type DbId = i64;
