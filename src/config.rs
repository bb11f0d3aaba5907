//! Configuration management for AssetDesk

use ::config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppResult;
use crate::models::{Department, Role};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// When set, logs also go to a daily rolling file in this directory
    pub directory: Option<String>,
}

/// One entry of the fixed credential map
#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: Department,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// Password shared by every account
    pub shared_password: String,
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the demo assets and employees when a session starts
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ActivityConfig {
    /// Maximum number of entries kept in the recent activity feed
    pub capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub warranty_alert_days: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
    pub activity: ActivityConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // ASSETDESK__LOGGING__LEVEL=debug and so on
            .add_source(
                Environment::with_prefix("ASSETDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_password: "password123".to_string(),
            accounts: vec![
                AccountConfig {
                    email: "admin@company.com".to_string(),
                    name: "John Admin".to_string(),
                    role: Role::Admin,
                    department: Department::It,
                },
                AccountConfig {
                    email: "dept.head@company.com".to_string(),
                    name: "Jane Head".to_string(),
                    role: Role::DepartmentHead,
                    department: Department::Hr,
                },
                AccountConfig {
                    email: "employee@company.com".to_string(),
                    name: "Bob Employee".to_string(),
                    role: Role::Employee,
                    department: Department::Sales,
                },
            ],
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_demo_data: true }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { warranty_alert_days: 30 }
    }
}
