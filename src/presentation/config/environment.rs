use std::fmt;
use std::str::FromStr;

/// Selects which `appsettings.<Environment>` file is layered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid environment `{0}`, expected one of: local, test, prod")]
pub struct UnknownEnvironment(pub String);

impl Environment {
    /// Suffix of the settings file for this environment.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    /// Reads `APP_ENVIRONMENT`; unset means [`Environment::Local`].
    pub fn from_env() -> Result<Self, UnknownEnvironment> {
        std::env::var("APP_ENVIRONMENT")
            .map(|value| value.parse())
            .unwrap_or(Ok(Self::default()))
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}
