use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use summarizer_engine::{EngineConfig, FetchSettings, SummaryParams};
use summarizer_logging::{engine_info, engine_warn};

pub(crate) const SETTINGS_FILENAME: &str = "summarizer_settings.ron";

/// Optional user settings read from `summarizer_settings.ron`.
///
/// Every field has a default, so a file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_page_bytes: u64,
    pub user_agent: Option<String>,
    pub max_summary_tokens: i64,
    pub min_summary_tokens: i64,
    pub num_beams: i64,
    pub length_penalty: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let summary = SummaryParams::default();
        Self {
            window_width: 800.0,
            window_height: 600.0,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            redirect_limit: fetch.redirect_limit,
            max_page_bytes: fetch.max_bytes,
            user_agent: None,
            max_summary_tokens: summary.max_length,
            min_summary_tokens: summary.min_length,
            num_beams: summary.num_beams,
            length_penalty: summary.length_penalty,
        }
    }
}

impl AppSettings {
    pub fn engine_config(&self) -> EngineConfig {
        let defaults = FetchSettings::default();
        EngineConfig {
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                redirect_limit: self.redirect_limit,
                max_bytes: self.max_page_bytes,
                user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
                allowed_content_types: defaults.allowed_content_types,
            },
            summary: SummaryParams {
                max_length: self.max_summary_tokens,
                min_length: self.min_summary_tokens,
                num_beams: self.num_beams,
                length_penalty: self.length_penalty,
                ..SummaryParams::default()
            },
        }
    }
}

/// Loads settings from `path`, falling back to defaults.
///
/// A missing file is normal. An unreadable or malformed file is logged
/// and ignored.
pub(crate) fn load_or_default(path: &Path) -> AppSettings {
    match read_settings(path) {
        Ok(Some(settings)) => {
            engine_info!("Loaded settings from {:?}", path);
            settings
        }
        Ok(None) => AppSettings::default(),
        Err(err) => {
            engine_warn!("Ignoring settings file: {:#}", err);
            AppSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> anyhow::Result<Option<AppSettings>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    };
    let settings = ron::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{load_or_default, AppSettings};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_or_default(&dir.path().join("absent.ron"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.engine_config().summary.max_length, 130);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "(request_timeout_secs: 5, num_beams: 2)").unwrap();

        let settings = load_or_default(&path);
        assert_eq!(settings.request_timeout_secs, 5);
        assert_eq!(settings.num_beams, 2);
        assert_eq!(settings.window_width, 800.0);

        let config = settings.engine_config();
        assert_eq!(config.fetch.request_timeout, Duration::from_secs(5));
        assert_eq!(config.summary.num_beams, 2);
        assert_eq!(config.summary.min_length, 30);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "(num_beams: \"four\"").unwrap();

        assert_eq!(load_or_default(&path), AppSettings::default());
    }
}
