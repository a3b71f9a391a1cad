pub mod files;
pub mod settings;

pub use files::{atomic_write, config_file, ensure_isostudy_dir, init_local_dir, log_file};
pub use settings::{load_config, save_config, AppConfig};
