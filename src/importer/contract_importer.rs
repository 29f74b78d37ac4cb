// ==========================================
// 管道采购决策支持 - 合同数据导入器
// ==========================================
// 流程: 解析 → 必需列校验 → 逐行映射
// 红线: 任一阶段失败即整体失败，不返回部分数据
// ==========================================

use crate::domain::ContractLine;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{column_aliases, ContractFieldMapper, REQUIRED_COLUMNS};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, FileParser, RawTable};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// ContractImporter - 合同数据导入器
// ==========================================
pub struct ContractImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl Default for ContractImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(ContractFieldMapper))
    }
}

impl ContractImporter {
    /// 创建导入器
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 从文件导入全部合同行（保持文件顺序）
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_from_file<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<Vec<ContractLine>> {
        let path = file_path.as_ref();

        // === 阶段 1: 文件解析 ===
        let table = self.file_parser.parse_to_raw_table(path)?;
        debug!(rows = table.records.len(), "文件解析完成");

        // === 阶段 2: 必需列校验 ===
        Self::check_required_columns(&table)?;

        // === 阶段 3: 字段映射 ===
        let lines = table
            .records
            .iter()
            .map(|record| self.field_mapper.map_to_contract_line(record))
            .collect::<ImportResult<Vec<_>>>()?;

        if lines.is_empty() {
            warn!("合同文件无数据行");
        }
        info!(lines = lines.len(), "合同数据加载完成");

        Ok(lines)
    }

    fn check_required_columns(table: &RawTable) -> ImportResult<()> {
        for column in REQUIRED_COLUMNS {
            let present = column_aliases(column)
                .iter()
                .any(|alias| table.headers.iter().any(|h| h == alias));
            if !present {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_import_keeps_file_order() {
        let file = write_csv(
            "Material,Package,DE,PN,Supplier,Price,Valid_Until\n\
             PVC,barre,250,16,Elydan,42.1,2030-12-31\n\
             PVC,barre,250,16,Centraltubi,40.0,2030-12-31\n",
        );

        let lines = ContractImporter::default().import_from_file(file.path()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].supplier, "Elydan");
        assert_eq!(lines[1].supplier, "Centraltubi");
    }

    #[test]
    fn test_import_missing_column_fails() {
        let file =
            write_csv("Material,Package,DE,PN,Supplier,Price\nPVC,barre,250,16,Elydan,42.1\n");

        let result = ContractImporter::default().import_from_file(file.path());

        assert!(matches!(result, Err(ImportError::MissingColumn(ref c)) if c == "Valid_Until"));
    }

    #[test]
    fn test_import_bad_row_fails_whole_load() {
        let file = write_csv(
            "Material,Package,DE,PN,Supplier,Price,Valid_Until\n\
             PVC,barre,250,16,Elydan,42.1,2030-12-31\n\
             PVC,barre,250,16,Centraltubi,abc,2030-12-31\n",
        );

        let result = ContractImporter::default().import_from_file(file.path());

        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { row: 3, .. })
        ));
    }
}
