mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{LoggingSettings, ServerSettings, Settings, StorageSettings, UploadSettings};
