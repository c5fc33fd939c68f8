pub mod db_status;
pub mod jobs;
pub mod projects;
