mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, parse_config};
pub use model::{CategoryChartConfig, Config, StyleConfig, YearChartConfig};
pub use validation::validate_config_semantics;
