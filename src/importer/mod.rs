// ==========================================
// 管道采购决策支持 - 导入层
// ==========================================
// 职责: 外部合同数据文件 → ContractLine 序列
// 支持: Excel, CSV
// ==========================================

pub mod contract_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;

// 重导出核心类型
pub use contract_importer::ContractImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ContractFieldMapper, REQUIRED_COLUMNS};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, RawRecord, RawTable};
