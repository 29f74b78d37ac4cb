// ==========================================
// 管道采购决策支持 - 决策结果模型
// ==========================================
// 每个请求生成一次，展示后丢弃，不落库
// 不含时间戳/随机 ID：相同输入 + 相同合同数据 → 相同结果
// ==========================================

use crate::domain::contract::PriceReference;
use crate::domain::types::Channel;
use serde::{Deserialize, Serialize};

/// 询价邮件草稿（mailto 按钮由 UI 生成）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// 采购决策
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub channel: Channel,
    pub message: String,
    pub target_supplier: Option<String>,
    pub price_references: Vec<PriceReference>, // 升序，最多 top_n 条
    pub reasons: Vec<String>,                  // 命中规则说明
    pub email: Option<EmailDraft>,
}
