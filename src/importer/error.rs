// ==========================================
// 管道采购决策支持 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 规则: 任一错误都使整批加载失败，不返回部分数据
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Fichier introuvable : {0}")]
    FileNotFound(String),

    #[error("Format de fichier non supporté : {0} (seuls .xlsx/.xls/.csv sont acceptés)")]
    UnsupportedFormat(String),

    #[error("Lecture du fichier impossible : {0}")]
    FileReadError(String),

    #[error("Lecture Excel impossible : {0}")]
    ExcelParseError(String),

    #[error("Lecture CSV impossible : {0}")]
    CsvParseError(String),

    // ===== 结构错误 =====
    #[error("Colonne obligatoire absente : {0}")]
    MissingColumn(String),

    // ===== 数据映射错误 =====
    #[error("Valeur manquante (ligne {row}, colonne {field})")]
    FieldMissing { row: usize, field: String },

    #[error("Conversion impossible (ligne {row}, colonne {field}) : {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("Date invalide (ligne {row}, colonne {field}) : {value}")]
    DateFormatError {
        row: usize,
        field: String,
        value: String,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
