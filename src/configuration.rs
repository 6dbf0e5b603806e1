use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::submission_client::HttpSubmissionClient;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub form: FormSettings,
    pub site: SiteSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct FormSettings {
    /// Element id of the form whose `submit` event is intercepted.
    pub form_id: String,
    pub endpoint: String,
    pub success_message: String,
    pub fallback_error_message: String,
    pub sending_label: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub auto_hide_millis: u64,
    /// No timeout unless set; a hung endpoint keeps the submit control disabled.
    #[serde(default)]
    pub timeout_millis: Option<u64>,
}

impl FormSettings {
    pub fn client(&self) -> anyhow::Result<HttpSubmissionClient> {
        HttpSubmissionClient::new(self)
    }

    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_millis)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_millis.map(Duration::from_millis)
    }
}

#[derive(Deserialize, Clone)]
pub struct SiteSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub header_shadow_threshold: f64,
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key: Secret<String>,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
