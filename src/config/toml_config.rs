use crate::config::FormatConfig;
use crate::domain::model::FailurePolicy;
use crate::utils::error::{FormatError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub format: FormatSection,
}

/// Every key is optional; absent keys keep the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatSection {
    pub roots: Option<Vec<PathBuf>>,
    pub suffixes: Option<Vec<String>>,
    pub tool: Option<String>,
    pub on_failure: Option<FailurePolicy>,
    pub sort_entries: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FormatError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLANG_FORMAT}); unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormatError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overlay the values present in the file onto `config`.
    pub fn apply_to(&self, config: &mut FormatConfig) {
        let section = &self.format;
        if let Some(roots) = &section.roots {
            config.roots = roots.clone();
        }
        if let Some(suffixes) = &section.suffixes {
            config.suffixes = suffixes.iter().cloned().collect();
        }
        if let Some(tool) = &section.tool {
            config.tool = tool.clone();
        }
        if let Some(policy) = section.on_failure {
            config.on_failure = policy;
        }
        if let Some(sort) = section.sort_entries {
            config.sort_entries = sort;
        }
    }
}
