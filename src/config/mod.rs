use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "openconfdb.toml";

const ENV_NAME_SEED: &str = "OPENCONFDB_SEED";

pub struct Config {
    pub store: Store,
    pub reminders: Reminders,
}

pub struct Store {
    /// JSON seed loaded into the in-memory store at startup.
    pub seed: Option<PathBuf>,
}

pub struct Reminders {
    pub task_interval_time: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(seed) = env::var(ENV_NAME_SEED) {
            cfg.store.seed = Some(PathBuf::from(seed));
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { store, reminders } = from;

        let raw::Store { seed } = store.unwrap_or_default();
        let store = Store { seed };

        let raw::Reminders { task_interval_time } = reminders.unwrap_or_default();
        let task_interval_time = task_interval_time.expect("Reminder task interval");
        let reminders = Reminders { task_interval_time };

        Ok(Self { store, reminders })
    }
}
