use dineflow_core::roles::{ROLE_ADMIN, ROLE_MANAGER};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Insert demo records into empty stores at startup (default: `true`).
    pub seed_demo_data: bool,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Manager portal login.
    pub manager: StaffAccount,
    /// Admin portal login.
    pub admin: StaffAccount,
}

/// A configured staff login. Staff have no stored record; the credentials
/// are compared directly.
#[derive(Debug, Clone)]
pub struct StaffAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: &'static str,
}

impl StaffAccount {
    /// Whether `email` / `password` match this account. Emails compare
    /// case-insensitively.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim()) && self.password == password
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | unset (in-memory store)    |
    /// | `SEED_DEMO_DATA`       | `true`                     |
    /// | `MANAGER_EMAIL`        | `manager@dineflow.local`   |
    /// | `MANAGER_PASSWORD`     | `manager123`               |
    /// | `ADMIN_EMAIL`          | `admin@dineflow.local`     |
    /// | `ADMIN_PASSWORD`       | `admin123`                 |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let seed_demo_data: bool = std::env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_DEMO_DATA must be true or false");

        let manager = StaffAccount {
            email: std::env::var("MANAGER_EMAIL")
                .unwrap_or_else(|_| "manager@dineflow.local".into()),
            password: std::env::var("MANAGER_PASSWORD").unwrap_or_else(|_| "manager123".into()),
            name: "Mess Manager".into(),
            role: ROLE_MANAGER,
        };

        let admin = StaffAccount {
            email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@dineflow.local".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            name: "Administrator".into(),
            role: ROLE_ADMIN,
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            seed_demo_data,
            jwt,
            manager,
            admin,
        }
    }

    /// Staff account matching the given credentials, if any.
    pub fn find_staff(&self, email: &str, password: &str) -> Option<&StaffAccount> {
        [&self.manager, &self.admin]
            .into_iter()
            .find(|account| account.matches(email, password))
    }

    /// Staff account for a role name, used to describe a token's subject.
    pub fn staff_for_role(&self, role: &str) -> Option<&StaffAccount> {
        [&self.manager, &self.admin]
            .into_iter()
            .find(|account| account.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> StaffAccount {
        StaffAccount {
            email: "manager@dineflow.local".into(),
            password: "manager123".into(),
            name: "Mess Manager".into(),
            role: ROLE_MANAGER,
        }
    }

    #[test]
    fn staff_email_is_case_insensitive() {
        assert!(account().matches(" Manager@DineFlow.local ", "manager123"));
    }

    #[test]
    fn staff_password_is_exact() {
        assert!(!account().matches("manager@dineflow.local", "Manager123"));
        assert!(!account().matches("manager@dineflow.local", ""));
    }
}
