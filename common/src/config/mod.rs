mod manager;
mod provider;
mod serializer;

pub use manager::{ConfigManager, Validate};
pub use provider::{ConfigContentProvider, FileContentConfigProvider};
pub use serializer::{ConfigSerializer, YamlConfigSerializer};
