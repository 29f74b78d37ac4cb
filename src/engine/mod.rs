// ==========================================
// 管道采购决策支持 - 引擎层
// ==========================================
// 职责: 采购渠道规则判定 + 合同价格排序
// 红线: 引擎不读文件，所有规则必须输出 reason
// ==========================================

pub mod price_resolver;
pub mod rule_core;
pub mod rule_engine;

// 重导出核心引擎
pub use price_resolver::{PriceResolver, DEFAULT_TOP_N};
pub use rule_core::{CastIronRules, GenericPipeRules, CAST_IRON_CONTRACT_TIERS};
pub use rule_engine::{RuleEngine, RuleOutcome, RuleVerdict};
