// ==========================================
// 管道采购决策支持 - 采购请求模型
// ==========================================
// PurchaseForm: UI 原始输入（下拉框文本，空串 = 未填）
// PurchaseRequest: 校验 + 口径转换后的请求，每次决策新建，不可变
// ==========================================

use crate::domain::types::{Package, RuleFamily};
use serde::{Deserialize, Serialize};

// ==========================================
// PurchaseForm - 表单输入
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseForm {
    pub material: String,
    pub package: String,
    pub outer_diameter: String,
    pub nominal_pressure: String,
    #[serde(default)]
    pub quantity: u64, // 米（ml），默认 0
}

impl PurchaseForm {
    /// 返回未填写的必填字段名（material/package/DE/PN）
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.material.trim().is_empty() {
            missing.push("material");
        }
        if self.package.trim().is_empty() {
            missing.push("package");
        }
        if self.outer_diameter.trim().is_empty() {
            missing.push("outer_diameter");
        }
        if self.nominal_pressure.trim().is_empty() {
            missing.push("nominal_pressure");
        }
        missing
    }
}

// ==========================================
// PurchaseRequest - 已校验请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub material: String,
    pub package: Package,
    pub outer_diameter: u32,
    pub nominal_pressure: f64,
    pub quantity: u64,
    pub is_cast_iron: bool, // 构造时一次性判定
}

impl PurchaseRequest {
    /// 构造请求
    ///
    /// # 参数
    /// - cast_iron_token: 铸铁判定关键字（默认 "fonte"）
    pub fn new(
        material: &str,
        package: &str,
        outer_diameter: u32,
        nominal_pressure: f64,
        quantity: u64,
        cast_iron_token: &str,
    ) -> Self {
        let material = material.trim().to_string();
        let is_cast_iron = is_cast_iron(&material, cast_iron_token);
        Self {
            material,
            package: Package::classify(package),
            outer_diameter,
            nominal_pressure,
            quantity,
            is_cast_iron,
        }
    }

    /// 所属规则族
    pub fn rule_family(&self) -> RuleFamily {
        if self.is_cast_iron {
            RuleFamily::CastIron
        } else {
            RuleFamily::GenericPipe
        }
    }
}

/// 铸铁材质判定：材料名（小写）包含关键字即为铸铁
///
/// 纯子串匹配，拼写变体（如 "font"、"ductile iron"）不会命中。
///
/// # 示例
/// ```
/// use pipe_purchase_advisor::domain::is_cast_iron;
/// assert!(is_cast_iron("Fonte ductile", "fonte"));
/// assert!(!is_cast_iron("PEHD", "fonte"));
/// ```
pub fn is_cast_iron(material: &str, token: &str) -> bool {
    material.to_lowercase().contains(&token.to_lowercase())
}
