use std::env;

/// Runtime configuration, read once at startup.
///
/// The JWT signing secret is deliberately not part of this struct; the
/// credential subsystem reads `JWT_SECRET` at point of use.
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    /// Number of background workers consuming the task queue.
    pub task_workers: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:postboard.db?mode=rwc".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            task_workers: env::var("TASK_WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .expect("TASK_WORKERS must be a number"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
