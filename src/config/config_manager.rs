// ==========================================
// 管道采购决策支持 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 查找顺序: 显式路径 → PIPE_ADVISOR_CONFIG → 用户配置目录 → 默认值
// ==========================================

use crate::config::advisor_config::AdvisorConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod config_keys {
    pub const ENV_CONFIG_PATH: &str = "PIPE_ADVISOR_CONFIG";
    pub const ENV_CONTRACTS_PATH: &str = "PIPE_ADVISOR_CONTRACTS_PATH";
    pub const ENV_LOCALE: &str = "PIPE_ADVISOR_LOCALE";

    pub const CONFIG_DIR_NAME: &str = "pipe-advisor";
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    UserDir(PathBuf),
    Defaults,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AdvisorConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行指定的配置文件（必须存在）
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_env(explicit_path, |key| std::env::var(key).ok())
    }

    /// 加载配置（环境变量读取可替换，便于测试）
    pub fn load_with_env<F>(explicit_path: Option<&Path>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, source) = match Self::locate(explicit_path, &env) {
            Some((source, path)) => (Self::read_file(&path)?, source),
            None => (AdvisorConfig::default(), ConfigSource::Defaults),
        };

        Self::apply_env_overrides(&mut config, &env);
        Self::validate(&config)?;

        info!(source = ?source, contracts = %config.contracts_path.display(), "配置加载完成");
        Ok(Self { config, source })
    }

    /// 从已有配置构造（校验后）
    pub fn from_config(config: AdvisorConfig) -> ConfigResult<Self> {
        Self::validate(&config)?;
        Ok(Self {
            config,
            source: ConfigSource::Defaults,
        })
    }

    /// 解析 JSON 配置文本
    pub fn parse_json(raw: &str) -> ConfigResult<AdvisorConfig> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn into_config(self) -> AdvisorConfig {
        self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 用户配置目录下的默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_keys::CONFIG_DIR_NAME)
                .join(config_keys::CONFIG_FILE_NAME)
        })
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn locate<F>(explicit_path: Option<&Path>, env: &F) -> Option<(ConfigSource, PathBuf)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit_path {
            return Some((ConfigSource::Explicit(path.to_path_buf()), path.to_path_buf()));
        }

        if let Some(path) = env(config_keys::ENV_CONFIG_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                let path = PathBuf::from(trimmed);
                return Some((ConfigSource::Environment(path.clone()), path));
            }
        }

        // 用户目录配置为可选
        Self::default_config_path()
            .filter(|p| p.exists())
            .map(|p| (ConfigSource::UserDir(p.clone()), p))
    }

    fn read_file(path: &Path) -> ConfigResult<AdvisorConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        debug!(path = %path.display(), "读取配置文件");
        let raw = fs::read_to_string(path)?;
        Self::parse_json(&raw)
    }

    fn apply_env_overrides<F>(config: &mut AdvisorConfig, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(config_keys::ENV_CONTRACTS_PATH).filter(|v| !v.trim().is_empty()) {
            config.contracts_path = PathBuf::from(path.trim());
        }
        if let Some(locale) = env(config_keys::ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            config.locale = locale.trim().to_string();
        }
    }

    /// 校验配置
    pub fn validate(config: &AdvisorConfig) -> ConfigResult<()> {
        if config.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                key: "top_n".to_string(),
                message: "doit être >= 1".to_string(),
            });
        }
        if config.cast_iron_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "cast_iron_token".to_string(),
                message: "ne peut pas être vide".to_string(),
            });
        }
        if !crate::i18n::is_supported(&config.locale) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                message: format!("langue non disponible : {}", config.locale),
            });
        }

        let suppliers = &config.suppliers;
        for (key, value) in [
            ("suppliers.pipe_manufacturer", &suppliers.pipe_manufacturer),
            ("suppliers.cast_iron_manufacturer", &suppliers.cast_iron_manufacturer),
            ("suppliers.distributor_contact", &suppliers.distributor_contact),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "ne peut pas être vide".to_string(),
                });
            }
        }

        Ok(())
    }
}
