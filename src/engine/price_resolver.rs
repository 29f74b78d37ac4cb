// ==========================================
// 管道采购决策支持 - 合同价格解析
// ==========================================
// 职责: 查询有效合同行 → 按价格升序 → 截取前 top_n
// 排序: 稳定排序，同价保持文件顺序（数据无第二排序键）
// 空结果不是错误，由调用方降级决策
// ==========================================

use crate::domain::{ContractLine, PriceReference};
use crate::repository::ContractStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// 默认参考价条数
pub const DEFAULT_TOP_N: usize = 2;

// ==========================================
// PriceResolver - 价格解析器
// ==========================================
#[derive(Debug, Clone)]
pub struct PriceResolver {
    store: Arc<ContractStore>,
}

impl PriceResolver {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    /// 解析参考价
    ///
    /// # 返回
    /// 升序、最多 top_n 条；无匹配返回空序列
    pub fn resolve(
        &self,
        material: &str,
        outer_diameter: u32,
        nominal_pressure: f64,
        as_of: NaiveDate,
        top_n: usize,
    ) -> Vec<PriceReference> {
        let candidates = self
            .store
            .query(material, outer_diameter, nominal_pressure, as_of);
        let ranked = Self::rank(candidates, top_n);
        debug!(
            material,
            outer_diameter,
            nominal_pressure,
            found = ranked.len(),
            "合同价格查询完成"
        );
        ranked
    }

    /// 卷盘合同参考价（单条，不排序）
    pub fn touret_reference(&self, material: &str, outer_diameter: u32) -> Option<PriceReference> {
        self.store
            .find_touret(material, outer_diameter)
            .map(PriceReference::from)
    }

    /// 稳定升序排序并截断
    pub fn rank(mut lines: Vec<&ContractLine>, top_n: usize) -> Vec<PriceReference> {
        // sort_by 为稳定排序
        lines.sort_by(|a, b| a.price.total_cmp(&b.price));
        lines.into_iter().take(top_n).map(PriceReference::from).collect()
    }
}
