pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RosterConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            sqlx_logging: false,
        }
    }

    pub fn postgres(host: &str, port: u16, username: &str, password: &str, name: &str) -> Self {
        Self::new(format!(
            "postgres://{}:{}@{}:{}/{}",
            username, password, host, port, name
        ))
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}
