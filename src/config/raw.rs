use std::{path::PathBuf, time::Duration};

use duration_str::deserialize_option_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("openconfdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub store: Option<Store>,
    pub reminders: Option<Reminders>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub seed: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reminders {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub task_interval_time: Option<Duration>,
}

impl Default for Reminders {
    fn default() -> Self {
        Config::default().reminders.expect("Reminders configuration")
    }
}
