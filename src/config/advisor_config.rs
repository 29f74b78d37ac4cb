use crate::engine::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 决策助手配置
///
/// 存储位置：JSON 文件（见 ConfigManager），缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// 合同数据文件（.xlsx/.xls/.csv）
    pub contracts_path: PathBuf,

    /// 参考价条数
    pub top_n: usize,

    /// 铸铁判定关键字（材料名小写子串匹配）
    pub cast_iron_token: String,

    /// 消息语言（fr / en）
    pub locale: String,

    /// 品类经理（转人工时展示）
    pub category_manager: String,

    /// 厂家直采是否包含 barre 且 DE > 315 子条件（待业务确认，默认包含）
    pub large_bar_manufacturer_clause: bool,

    /// 供应商名录
    pub suppliers: SupplierDirectory,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            contracts_path: PathBuf::from("contracts_b.xlsx"),
            top_n: DEFAULT_TOP_N,
            cast_iron_token: "fonte".to_string(),
            locale: "fr".to_string(),
            category_manager: "Zélie XIA".to_string(),
            large_bar_manufacturer_clause: true,
            suppliers: SupplierDirectory::default(),
        }
    }
}

/// 供应商名录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierDirectory {
    /// 通用管材厂家（询价邮件收件方）
    pub pipe_manufacturer: String,

    /// 厂家询价结论中展示的厂家列表
    pub pipe_manufacturers_label: String,

    /// 铸铁管厂家
    pub cast_iron_manufacturer: String,

    /// 经销商联系人（泛指）
    pub distributor_contact: String,
}

impl Default for SupplierDirectory {
    fn default() -> Self {
        Self {
            pipe_manufacturer: "Elydan".to_string(),
            pipe_manufacturers_label: "Elydan, Centraltubi".to_string(),
            cast_iron_manufacturer: "Electrosteel".to_string(),
            distributor_contact: "votre contact Commercial".to_string(),
        }
    }
}
