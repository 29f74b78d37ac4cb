// ==========================================
// 管道采购决策支持 - 配置层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Fichier de configuration introuvable : {0}")]
    FileNotFound(String),

    #[error("Lecture de la configuration impossible : {0}")]
    ReadError(String),

    #[error("Configuration mal formée : {0}")]
    ParseError(String),

    #[error("Valeur de configuration invalide (clé {key}) : {message}")]
    InvalidValue { key: String, message: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::ReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
