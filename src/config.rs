// Configuration de l'application, lue depuis l'environnement (.env chargé par dotenv)

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::utils::password::{DEFAULT_ITERATIONS, PasswordEncoder};

const DEV_SESSION_SECRET: &str = "dev-insecure-session-secret-change-this";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("SESSION_SECRET must be set when APP_ENV=production")]
    InsecureSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub admin: AdminSeed,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub session_secret: String,
    pub session_hours: i64,
    pub cookie_secure: bool,
    pub password_iterations: u32,
}

/// Compte administrateur créé au démarrage s'il n'existe pas
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub fullname: String,
    pub password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let session_secret = match (env::var("SESSION_SECRET").ok(), environment) {
            (Some(secret), _) if !secret.is_empty() => secret,
            (_, Environment::Production) => return Err(ConfigError::InsecureSecret),
            (_, Environment::Development) => {
                tracing::warn!("SESSION_SECRET not set, using the development secret (INSECURE)");
                DEV_SESSION_SECRET.to_string()
            }
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_var("PORT", 8080)?,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
            },
            security: SecurityConfig {
                session_secret,
                session_hours: parse_var("SESSION_HOURS", 8)?,
                cookie_secure: parse_var("SESSION_COOKIE_SECURE", false)?,
                password_iterations: parse_var("PASSWORD_HASH_ITERATIONS", DEFAULT_ITERATIONS)?,
            },
            admin: AdminSeed {
                username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                fullname: env::var("ADMIN_FULLNAME").unwrap_or_else(|_| "Administrator".to_string()),
                password: env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
            },
        })
    }

    /// Configuration pour les tests: SQLite en mémoire, hash rapide, pas d'admin
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            security: SecurityConfig {
                session_secret: "test-session-secret".to_string(),
                session_hours: 1,
                cookie_secure: false,
                password_iterations: 1_000,
            },
            admin: AdminSeed {
                username: "admin".to_string(),
                fullname: "Administrator".to_string(),
                password: None,
            },
        }
    }

    pub fn password_encoder(&self) -> PasswordEncoder {
        PasswordEncoder::new(self.security.password_iterations)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
