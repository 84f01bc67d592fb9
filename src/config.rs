use crate::{settings::SettingsArgs, Settings};
use anyhow::Context;
use log::trace;
use std::{
    env,
    path::{Path, PathBuf},
};

/// A configuration for running Docmarks.
#[derive(Debug, PartialEq, Default)]
pub struct Config {
    /// The path of the settings file, if any.
    pub settings_path: Option<PathBuf>,
    /// The absolute path of the generated bookmark file.
    pub output_path: PathBuf,
    /// The configured settings.
    pub settings: Settings,
}

impl Config {
    pub fn init(
        settings_path: Option<&Path>,
        settings_args: &SettingsArgs,
    ) -> Result<Config, anyhow::Error> {
        let mut settings = Settings::init(settings_path)?;
        settings.apply(settings_args)?;

        let current_dir = env::current_dir().context("Can't get current directory")?;
        let output_path = current_dir.join(&settings.output_file);

        let config = Config {
            settings_path: settings_path.map(ToOwned::to_owned),
            output_path,
            settings,
        };

        trace!("Config: {:#?}", config);

        Ok(config)
    }
}
