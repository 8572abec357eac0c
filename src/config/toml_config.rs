use crate::domain::model::LabId;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "labbook.toml";
pub const DEFAULT_DATA_FILE: &str = "filename.txt";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LabbookConfig {
    #[serde(default)]
    pub files: FilesConfig,
    /// 互動實驗的輸入腳本，key 為實驗名稱
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_data_file")]
    pub path: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            path: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl LabbookConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LabbookConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 指定路徑優先；否則使用目前目錄的 labbook.toml（若存在）
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            Self::from_file(default_path)
        } else {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.files.path = path.into();
        self
    }
}

impl SettingsProvider for LabbookConfig {
    fn file_path(&self) -> &str {
        &self.files.path
    }

    fn scripted_input(&self, lab: &str) -> Option<&str> {
        self.inputs.get(lab).map(String::as_str)
    }
}

impl Validate for LabbookConfig {
    fn validate(&self) -> Result<()> {
        validate_path("files.path", &self.files.path)?;

        let interactive: Vec<&str> = LabId::ALL
            .into_iter()
            .filter(|id| id.is_interactive())
            .map(LabId::name)
            .collect();
        // 先確認是已知實驗，再確認它會讀輸入
        for lab in self.inputs.keys() {
            let id: LabId = lab.parse()?;
            validate_one_of("inputs", id.name(), &interactive)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = LabbookConfig::from_toml("").unwrap();
        assert_eq!(config.file_path(), DEFAULT_DATA_FILE);
        assert!(config.inputs.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_files_and_inputs() {
        let config = LabbookConfig::from_toml(
            r#"
[files]
path = "notes/out.txt"

[inputs]
conditions = "2 85"
loops = "4"
"#,
        )
        .unwrap();

        assert_eq!(config.file_path(), "notes/out.txt");
        assert_eq!(config.scripted_input("conditions"), Some("2 85"));
        assert_eq!(config.scripted_input("functions"), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inputs_for_non_interactive_lab_are_rejected() {
        let config = LabbookConfig::from_toml("[inputs]\narrays = \"1\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("arrays"));
    }

    #[test]
    fn test_inputs_for_unknown_lab_are_rejected() {
        let config = LabbookConfig::from_toml("[inputs]\nloopz = \"1\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::LabError::UnknownLabError { ref name } if name == "loopz"
        ));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = LabbookConfig::from_toml("[files\npath = 1").unwrap_err();
        assert!(matches!(err, crate::utils::error::LabError::ConfigParseError(_)));
    }
}
