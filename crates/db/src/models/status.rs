/// Live facts about the connected MySQL server.
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub version: String,
    pub uptime_secs: i64,
    pub current_database: Option<String>,
    pub table_count: i64,
    pub connected_threads: i64,
}
