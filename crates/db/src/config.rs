use std::fmt;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

use crate::retry::RetryPolicy;

const DEFAULT_HOST: &str = "mysql:3306";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_USER: &str = "devsite_user";
const DEFAULT_DATABASE: &str = "devsite_db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the MySQL server.
///
/// Resolution never fails: every missing or malformed value falls back to a
/// default (or to an empty password).
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Policy used by [`crate::connect`] while waiting for the server.
    pub retry: RetryPolicy,
}

impl DbConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                     | Default        |
    /// |-----------------------------|----------------|
    /// | `MYSQL_HOST`                | `mysql:3306`   |
    /// | `MYSQL_USER`                | `devsite_user` |
    /// | `MYSQL_PASSWORD_FILE`       | (empty)        |
    /// | `MYSQL_DATABASE`            | `devsite_db`   |
    /// | `MYSQL_MAX_CONNECTIONS`     | `10`           |
    /// | `MYSQL_CONNECT_ATTEMPTS`    | `30`           |
    /// | `MYSQL_CONNECT_INTERVAL_MS` | `1000`         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup. Empty values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host_port = var("MYSQL_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let (host, port) = split_host_port(&host_port);

        let password = var("MYSQL_PASSWORD_FILE")
            .map(|path| read_secret(&path))
            .unwrap_or_default();

        let defaults = RetryPolicy::default();
        let attempts = parse_or(var("MYSQL_CONNECT_ATTEMPTS"), defaults.max_attempts);
        let interval_ms = parse_or(
            var("MYSQL_CONNECT_INTERVAL_MS"),
            defaults.initial_delay.as_millis() as u64,
        );

        Self {
            host,
            port,
            username: var("MYSQL_USER").unwrap_or_else(|| DEFAULT_USER.into()),
            password,
            database: var("MYSQL_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()),
            max_connections: parse_or(var("MYSQL_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            retry: RetryPolicy::fixed(attempts, Duration::from_millis(interval_ms)),
        }
    }

    #[cfg(test)]
    fn password(&self) -> &str {
        &self.password
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Split `host[:port]` on the first colon. A missing or unparsable port
/// falls back to 3306.
fn split_host_port(value: &str) -> (String, u16) {
    match value.split_once(':') {
        Some((host, port)) => {
            let port = port.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port, "Invalid MYSQL_HOST port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            });
            (host.to_string(), port)
        }
        None => (value.to_string(), DEFAULT_PORT),
    }
}

/// Read a secret file, trimming surrounding whitespace. Unreadable files
/// yield an empty string.
fn read_secret(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) => {
            tracing::warn!(path, error = %e, "Could not read secret file");
            String::new()
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
