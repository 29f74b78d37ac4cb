// ==========================================
// 管道采购决策支持 - 领域类型定义
// ==========================================
// 包装形式 / 采购渠道 / 规则族
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 包装形式 (Package)
// ==========================================
// 在构造请求时一次性分类，规则判定不再重复解析字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Package {
    Couronne,      // 盘卷
    Barre,         // 直管
    Touret,        // 卷盘
    Other(String), // 其他（铸铁管等自由填写）
}

impl Package {
    /// 分类包装形式（去空白 + 忽略大小写）
    ///
    /// # 示例
    /// ```
    /// use pipe_purchase_advisor::Package;
    /// assert_eq!(Package::classify(" Touret "), Package::Touret);
    /// assert_eq!(Package::classify("palette"), Package::Other("palette".to_string()));
    /// ```
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "couronne" => Package::Couronne,
            "barre" => Package::Barre,
            "touret" => Package::Touret,
            _ => Package::Other(trimmed.to_string()),
        }
    }

    /// 返回用于展示/邮件的文本
    pub fn as_str(&self) -> &str {
        match self {
            Package::Couronne => "couronne",
            Package::Barre => "barre",
            Package::Touret => "touret",
            Package::Other(label) => label.as_str(),
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 采购渠道 (Channel)
// ==========================================
// 每个请求有且仅有一个渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    DistributorConsult,  // 经销商询价
    ContractPricing,     // 框架合同价
    ManufacturerConsult, // 厂家询价
    TouretSpecial,       // 卷盘专项
    Escalate,            // 转品类经理
}

impl Channel {
    /// 是否需要向第三方询价（决定是否生成邮件草稿）
    pub fn implies_consultation(&self) -> bool {
        matches!(
            self,
            Channel::DistributorConsult | Channel::ManufacturerConsult | Channel::TouretSpecial
        )
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::DistributorConsult => write!(f, "DISTRIBUTOR_CONSULT"),
            Channel::ContractPricing => write!(f, "CONTRACT_PRICING"),
            Channel::ManufacturerConsult => write!(f, "MANUFACTURER_CONSULT"),
            Channel::TouretSpecial => write!(f, "TOURET_SPECIAL"),
            Channel::Escalate => write!(f, "ESCALATE"),
        }
    }
}

// ==========================================
// 规则族 (Rule Family)
// ==========================================
// 由材料名分类得出，两族互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleFamily {
    GenericPipe, // 通用管材 (PE/PVC ...)
    CastIron,    // 球墨铸铁管
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleFamily::GenericPipe => write!(f, "GENERIC_PIPE"),
            RuleFamily::CastIron => write!(f, "CAST_IRON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_classify_case_insensitive() {
        assert_eq!(Package::classify("TOURET"), Package::Touret);
        assert_eq!(Package::classify("Barre"), Package::Barre);
        assert_eq!(Package::classify("couronne"), Package::Couronne);
    }

    #[test]
    fn test_package_other_keeps_label() {
        let package = Package::classify("  Emboîtement  ");
        assert_eq!(package, Package::Other("Emboîtement".to_string()));
        assert_eq!(package.to_string(), "Emboîtement");
    }

    #[test]
    fn test_channel_consultation() {
        assert!(Channel::DistributorConsult.implies_consultation());
        assert!(Channel::ManufacturerConsult.implies_consultation());
        assert!(Channel::TouretSpecial.implies_consultation());
        assert!(!Channel::ContractPricing.implies_consultation());
        assert!(!Channel::Escalate.implies_consultation());
    }
}
