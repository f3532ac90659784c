mod config;

pub use config::{CONFIG_FILE_NAME, Config, get_config_manager, get_config_path};
