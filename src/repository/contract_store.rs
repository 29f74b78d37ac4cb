// ==========================================
// 管道采购决策支持 - 合同数据存储
// ==========================================
// 生命周期: 进程启动时加载一次，之后只读
// 查询: 对有序合同行序列顺序过滤，不预建索引
// ==========================================

use crate::domain::ContractLine;
use crate::importer::{ContractImporter, ImportResult};
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

// ==========================================
// ContractStore - 只读合同数据
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ContractStore {
    lines: Vec<ContractLine>, // 文件顺序
}

impl ContractStore {
    /// 从文件加载（.xlsx/.xls/.csv）
    ///
    /// 任何读取失败都返回错误，不返回部分数据
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        Self::load_with(&ContractImporter::default(), path)
    }

    /// 使用指定导入器加载
    pub fn load_with<P: AsRef<Path>>(importer: &ContractImporter, path: P) -> ImportResult<Self> {
        let lines = importer.import_from_file(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            lines = lines.len(),
            "合同数据已载入"
        );
        Ok(Self { lines })
    }

    /// 从已有合同行构造
    pub fn from_lines(lines: Vec<ContractLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ContractLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 查询有效合同行
    ///
    /// # 规则
    /// - material 精确匹配
    /// - outer_diameter / nominal_pressure 数值精确相等（无容差）
    /// - valid_until >= as_of
    ///
    /// # 返回
    /// 按文件顺序排列的匹配行
    pub fn query(
        &self,
        material: &str,
        outer_diameter: u32,
        nominal_pressure: f64,
        as_of: NaiveDate,
    ) -> Vec<&ContractLine> {
        self.lines
            .iter()
            .filter(|line| {
                line.material == material
                    && line.outer_diameter == outer_diameter
                    && line.nominal_pressure == nominal_pressure
                    && line.is_valid_on(as_of)
            })
            .collect()
    }

    /// 查找卷盘合同行（文件顺序第一条）
    ///
    /// 只匹配 package=touret、material、DE；忽略 PN 与有效期
    pub fn find_touret(&self, material: &str, outer_diameter: u32) -> Option<&ContractLine> {
        self.lines.iter().find(|line| {
            line.is_touret() && line.material == material && line.outer_diameter == outer_diameter
        })
    }

    // ==========================================
    // 下拉选项（供 UI 填充）
    // ==========================================

    /// 去重排序后的材质列表
    pub fn materials(&self) -> Vec<String> {
        let mut values: Vec<String> = self.lines.iter().map(|l| l.material.clone()).collect();
        values.sort();
        values.dedup();
        values
    }

    /// 去重排序后的外径列表
    pub fn outer_diameters(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self.lines.iter().map(|l| l.outer_diameter).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// 去重排序后的压力等级列表
    pub fn nominal_pressures(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.lines.iter().map(|l| l.nominal_pressure).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(
        material: &str,
        package: &str,
        de: u32,
        pn: f64,
        supplier: &str,
        valid: (i32, u32, u32),
    ) -> ContractLine {
        ContractLine {
            material: material.to_string(),
            package: package.to_string(),
            outer_diameter: de,
            nominal_pressure: pn,
            supplier: supplier.to_string(),
            price: 10.0,
            valid_until: NaiveDate::from_ymd_opt(valid.0, valid.1, valid.2).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn test_query_exact_match_and_validity() {
        let store = ContractStore::from_lines(vec![
            line("PVC", "barre", 250, 16.0, "A", (2026, 12, 31)),
            line("PVC", "barre", 250, 16.0, "Expired", (2026, 2, 28)),
            line("PVC", "barre", 250, 10.0, "OtherPN", (2026, 12, 31)),
            line("pvc", "barre", 250, 16.0, "OtherCase", (2026, 12, 31)),
            line("PVC", "barre", 250, 16.0, "SameDay", (2026, 3, 1)),
        ]);

        let found: Vec<&str> = store
            .query("PVC", 250, 16.0, today())
            .iter()
            .map(|l| l.supplier.as_str())
            .collect();

        assert_eq!(found, vec!["A", "SameDay"]);
    }

    #[test]
    fn test_find_touret_ignores_pressure_and_takes_first() {
        let store = ContractStore::from_lines(vec![
            line("PEHD", "barre", 110, 16.0, "Bar", (2030, 1, 1)),
            line("PEHD", " Touret ", 110, 10.0, "First", (2020, 1, 1)),
            line("PEHD", "touret", 110, 16.0, "Second", (2030, 1, 1)),
        ]);

        let found = store.find_touret("PEHD", 110).unwrap();
        assert_eq!(found.supplier, "First");
        assert!(store.find_touret("PEHD", 125).is_none());
    }

    #[test]
    fn test_option_lists_sorted_distinct() {
        let store = ContractStore::from_lines(vec![
            line("PVC", "barre", 250, 16.0, "A", (2030, 1, 1)),
            line("PEHD", "barre", 110, 10.0, "B", (2030, 1, 1)),
            line("PVC", "barre", 110, 16.0, "C", (2030, 1, 1)),
        ]);

        assert_eq!(store.materials(), vec!["PEHD".to_string(), "PVC".to_string()]);
        assert_eq!(store.outer_diameters(), vec![110, 250]);
        assert_eq!(store.nominal_pressures(), vec![10.0, 16.0]);
    }
}
