use crate::json;
use anyhow::{anyhow, Context};
use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use url::Url;

/// The default for `Settings::base_url`.
const BASE_URL_DEFAULT: &str = "https://kubernetes.io/";

/// The default for `Settings::root_title`.
const ROOT_TITLE_DEFAULT: &str = "Kubernetes Documents";

/// The default for `Settings::root_path`.
const ROOT_PATH_DEFAULT: &str = "docs";

/// The default for `Settings::sections`.
const SECTIONS_DEFAULT: &[&str] = &[
    "docs/setup",
    "docs/concepts",
    "docs/tasks",
    "docs/tutorials",
    "docs/reference",
];

/// The default for `Settings::output_file`.
const OUTPUT_FILE_DEFAULT: &str = "Kubernetes Documents Bookmarks.html";

/// The default for `Settings::request_timeout`.
const REQUEST_TIMEOUT_DEFAULT: u64 = 60_000;

/// The default for `Settings::user_agent`.
const USER_AGENT_DEFAULT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Optional settings configured via `Args`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SettingsArgs {
    /// The base url the sections and links are resolved against.
    pub base_url: Option<String>,
    /// The paths of the sections to be crawled.
    pub sections: Vec<String>,
    /// The name of the generated bookmark file.
    pub output_file: Option<String>,
    /// The request timeout in milliseconds.
    pub request_timeout: Option<u64>,
}

/// The CSS selectors to locate the table of contents in a page.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct SelectorSettings {
    /// The element containing the table of contents.
    pub toc: String,
    /// The accordion within the table of contents whose children are the
    /// top-level entries.
    pub accordion: String,
    /// The element within a folder containing the nested entries.
    pub container: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            toc: String::from("#docsToc"),
            accordion: String::from("div.pi-accordion"),
            container: String::from("div.container"),
        }
    }
}

/// Describes the settings used in Docmarks.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct Settings {
    /// The base url the sections and links are resolved against.
    pub base_url: String,
    /// The title of the synthetic root.
    pub root_title: String,
    /// The path of the synthetic root relative to `base_url`.
    pub root_path: String,
    /// The paths of the sections to be crawled, in order.
    pub sections: Vec<String>,
    /// The name of the generated bookmark file.
    pub output_file: String,
    /// The request timeout in milliseconds.
    pub request_timeout: u64,
    /// The user agent sent with every request.
    pub user_agent: String,
    pub selectors: SelectorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL_DEFAULT.to_owned(),
            root_title: ROOT_TITLE_DEFAULT.to_owned(),
            root_path: ROOT_PATH_DEFAULT.to_owned(),
            sections: SECTIONS_DEFAULT
                .iter()
                .map(|section| section.to_string())
                .collect(),
            output_file: OUTPUT_FILE_DEFAULT.to_owned(),
            request_timeout: REQUEST_TIMEOUT_DEFAULT,
            user_agent: USER_AGENT_DEFAULT.to_owned(),
            selectors: SelectorSettings::default(),
        }
    }
}

impl Settings {
    /// Read the settings file if given, or fall back to the defaults.
    pub fn init(settings_path: Option<&Path>) -> Result<Settings, anyhow::Error> {
        match settings_path {
            Some(settings_path) if settings_path.exists() => {
                debug!("Reading settings file at {}", settings_path.display());
                let mut buf = Vec::new();
                let mut settings_file = File::open(settings_path).context(format!(
                    "Can't open settings file at {}",
                    settings_path.display()
                ))?;
                settings_file
                    .read_to_end(&mut buf)
                    .context("Can't read settings file")?;
                let settings = json::deserialize::<Settings>(&buf)?;
                Ok(settings)
            }
            Some(settings_path) => Err(anyhow!(
                "Missing settings file at {}",
                settings_path.display()
            )),
            None => {
                debug!("Use default settings");
                Ok(Settings::default())
            }
        }
    }

    /// Override the settings with the arguments given on the command line.
    pub fn apply(&mut self, settings_args: &SettingsArgs) -> Result<(), anyhow::Error> {
        if let Some(base_url) = &settings_args.base_url {
            self.set_base_url(base_url)?;
        }

        if !settings_args.sections.is_empty() {
            self.set_sections(settings_args.sections.clone());
        }

        if let Some(output_file) = &settings_args.output_file {
            self.set_output_file(output_file);
        }

        if let Some(request_timeout) = settings_args.request_timeout {
            self.set_request_timeout(request_timeout);
        }

        Ok(())
    }

    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), anyhow::Error> {
        let url = Url::parse(base_url).context(format!("Invalid url {base_url}"))?;

        if url.cannot_be_a_base() {
            return Err(anyhow!("Invalid base url: {url}"));
        }

        debug!("Set `base_url` to {url}");
        self.base_url = url.to_string();

        Ok(())
    }

    pub fn set_sections(&mut self, sections: Vec<String>) {
        debug!("Set `sections` to {sections:?}");
        self.sections = sections;
    }

    pub fn set_output_file(&mut self, output_file: &str) {
        debug!("Set `output_file` to {output_file}");
        self.output_file = output_file.to_owned();
    }

    pub fn set_request_timeout(&mut self, request_timeout: u64) {
        debug!("Set `request_timeout` to {request_timeout}");
        self.request_timeout = request_timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_init_default() {
        let settings = Settings::init(None).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.base_url, "https://kubernetes.io/");
        assert_eq!(settings.sections.len(), 5);
        assert_eq!(settings.output_file, "Kubernetes Documents Bookmarks.html");
    }

    #[test]
    fn test_init_from_file() {
        let temp_dir = tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        let mut settings_file = File::create(&settings_path).unwrap();
        settings_file
            .write_all(
                br#"{
                    "base_url": "https://docs.example.com/",
                    "sections": ["guide"],
                    "selectors": { "toc": "nav.toc" }
                }"#,
            )
            .unwrap();

        let res = Settings::init(Some(&settings_path));
        assert!(res.is_ok(), "{}", res.unwrap_err());

        let settings = res.unwrap();
        assert_eq!(
            settings,
            Settings {
                base_url: String::from("https://docs.example.com/"),
                sections: vec![String::from("guide")],
                selectors: SelectorSettings {
                    toc: String::from("nav.toc"),
                    ..Default::default()
                },
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_init_missing_file() {
        let temp_dir = tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let res = Settings::init(Some(&settings_path));
        assert!(res.is_err());
    }

    #[test]
    fn test_apply() {
        let mut settings = Settings::default();
        let settings_args = SettingsArgs {
            base_url: Some(String::from("http://127.0.0.1:8080")),
            sections: vec![String::from("docs/setup")],
            output_file: Some(String::from("bookmarks.html")),
            request_timeout: Some(1_000),
        };

        let res = settings.apply(&settings_args);
        assert!(res.is_ok(), "{}", res.unwrap_err());
        assert_eq!(
            settings,
            Settings {
                base_url: String::from("http://127.0.0.1:8080/"),
                sections: vec![String::from("docs/setup")],
                output_file: String::from("bookmarks.html"),
                request_timeout: 1_000,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_apply_empty() {
        let mut settings = Settings::default();
        settings.apply(&SettingsArgs::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_set_base_url_invalid() {
        let mut settings = Settings::default();
        assert!(settings.set_base_url("kubernetes.io").is_err());
        assert!(settings.set_base_url("mailto:docs@kubernetes.io").is_err());
        assert_eq!(settings.base_url, "https://kubernetes.io/");
    }
}
