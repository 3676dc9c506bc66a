use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    /// Root for per-request upload directories. The system temp dir when unset.
    pub scratch_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers `appsettings.<Environment>`, `APP_*` variables and finally `PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let settings_file = format!("appsettings.{}", environment.file_suffix());

        let builder = Config::builder()
            .add_source(File::with_name(&settings_file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        Self::from_builder(builder)
    }

    /// Applies defaults underneath whatever sources `builder` already carries.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("upload.max_file_size_mb", DEFAULT_MAX_FILE_SIZE_MB as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .build()?
            .try_deserialize()
    }
}
