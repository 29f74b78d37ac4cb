// ==========================================
// 管道采购决策支持 - API层错误类型
// ==========================================
// 职责: 定义决策门面错误类型，转换导入/配置错误为用户可读消息
// 分级: DataUnavailable 阻断会话；IncompleteRequest/InvalidField 可恢复（提示后重填）
// 无价格不是错误（空参考价序列，由决策降级处理）
// ==========================================

use crate::config::ConfigError;
use crate::i18n::t_in;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 数据错误（阻断）
    // ==========================================
    #[error("Données contractuelles indisponibles : {0}")]
    DataUnavailable(String),

    // ==========================================
    // 请求错误（可恢复）
    // ==========================================
    #[error("Requête incomplète, champs manquants : {}", .missing.join(", "))]
    IncompleteRequest { missing: Vec<String> },

    #[error("Valeur invalide pour {field} : {value}")]
    InvalidField { field: String, value: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("Configuration invalide : {0}")]
    Config(#[from] ConfigError),
}

// ==========================================
// 从 ImportError 转换
// 规则: 任何加载失败都视为数据不可用，不允许带部分数据继续决策
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::DataUnavailable(err.to_string())
    }
}

impl ApiError {
    /// 是否为可恢复的输入问题（UI 以警告展示，用户重新提交）
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::IncompleteRequest { .. } | ApiError::InvalidField { .. }
        )
    }

    /// 面向用户的本地化提示
    pub fn user_message(&self, locale: &str) -> String {
        match self {
            ApiError::IncompleteRequest { .. } => t_in(locale, "warning.incomplete", &[]),
            ApiError::InvalidField { field, value } => t_in(
                locale,
                "warning.invalid_field",
                &[("field", field.as_str()), ("value", value.as_str())],
            ),
            ApiError::DataUnavailable(detail) => {
                t_in(locale, "error.data_unavailable", &[("detail", detail.as_str())])
            }
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_maps_to_data_unavailable() {
        let err: ApiError = ImportError::FileNotFound("contracts_b.xlsx".to_string()).into();
        assert!(matches!(err, ApiError::DataUnavailable(ref d) if d.contains("contracts_b.xlsx")));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_incomplete_request_message() {
        let err = ApiError::IncompleteRequest {
            missing: vec!["package".to_string(), "nominal_pressure".to_string()],
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("package, nominal_pressure"));
        assert!(err.user_message("fr").contains("Veuillez remplir tous les champs"));
    }
}
