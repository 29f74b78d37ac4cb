// ==========================================
// 管道采购决策支持 - 合同导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 字段映射 → 合同行
// ==========================================

use crate::domain::ContractLine;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - 解析后的原始表格
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,    // 表头（已 TRIM）
    pub records: Vec<RawRecord>, // 数据行（已跳过全空行）
}

#[derive(Debug, Clone)]
pub struct RawRecord {
    pub row_number: usize, // 源文件行号（表头为第 1 行）
    pub fields: HashMap<String, String>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 行记录
    /// - Err: 文件不存在、格式错误、读取失败
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 实现者: ContractFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 ContractLine
    ///
    /// # 返回
    /// - Ok(ContractLine): 映射后的合同行
    /// - Err: 必填值缺失、类型转换失败
    fn map_to_contract_line(&self, record: &RawRecord) -> ImportResult<ContractLine>;
}
