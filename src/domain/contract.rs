// ==========================================
// 管道采购决策支持 - 合同领域模型
// ==========================================
// 用途: 导入层写入，仓储/引擎层只读
// 数据列: Material, Package, DE, PN, Supplier, Price, Valid_Until
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ContractLine - 合同价格行
// ==========================================
// 加载后不可变；不建索引，查询为顺序过滤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractLine {
    pub material: String,      // 材质（精确匹配）
    pub package: String,       // 包装形式（原文）
    pub outer_diameter: u32,   // 外径 DE
    pub nominal_pressure: f64, // 公称压力 PN
    pub supplier: String,      // 供应商
    pub price: f64,            // 单价（€/ml）
    pub valid_until: NaiveDate, // 有效期截止（含当日）
}

impl ContractLine {
    /// 在给定日期是否仍有效（valid_until >= as_of）
    pub fn is_valid_on(&self, as_of: NaiveDate) -> bool {
        self.valid_until >= as_of
    }

    /// 是否为卷盘（touret）合同行
    pub fn is_touret(&self) -> bool {
        self.package.trim().eq_ignore_ascii_case("touret")
    }
}

// ==========================================
// PriceReference - 价格参考
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReference {
    pub supplier: String,
    pub price: f64,
    pub valid_until: NaiveDate,
}

impl From<&ContractLine> for PriceReference {
    fn from(line: &ContractLine) -> Self {
        Self {
            supplier: line.supplier.clone(),
            price: line.price,
            valid_until: line.valid_until,
        }
    }
}
