use crate::config::{resolve_base_url, ClientConfig, BASE_URL_ENV, MAX_TIMEOUT_SECONDS};
use crate::domain::model::DEFAULT_SUGGESTION_COUNT;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub ml: MlSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MlSection {
    pub k: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLOW_DEFENCE_API_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Client settings; a missing `base_url` falls back to the environment.
    pub fn client_config(&self) -> ClientConfig {
        let base_url = match &self.api.base_url {
            Some(url) => url.clone(),
            None => resolve_base_url(std::env::var(BASE_URL_ENV).ok()),
        };

        ClientConfig {
            base_url,
            timeout_seconds: self.api.timeout_seconds,
            connect_timeout_seconds: self.api.connect_timeout_seconds,
            suggestion_count: self.ml.k.unwrap_or(DEFAULT_SUGGESTION_COUNT),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    /// The configured level when it is one the logger understands.
    pub fn valid_log_level(&self) -> Option<&str> {
        self.log_level().filter(|level| LOG_LEVELS.contains(level))
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(ClientError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        // 只檢查檔案本身提供的值; 合併後的設定由 ApiClient::from_config 再驗證
        if let Some(url) = &self.api.base_url {
            validate_url("api.base_url", url)?;
        }
        if let Some(timeout) = self.api.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(timeout) = self.api.connect_timeout_seconds {
            validate_range("api.connect_timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(k) = self.ml.k {
            validate_positive_number("ml.k", k, 1)?;
        }

        Ok(())
    }
}
