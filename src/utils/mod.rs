pub mod config;

pub use config::{apply_env_overrides, default_data_dir, load_app_config};
