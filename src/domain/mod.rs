// ==========================================
// 管道采购决策支持 - 领域模型层
// ==========================================
// 职责: 定义合同行、采购请求、决策结果等领域实体
// 红线: 不含数据访问逻辑,不含规则逻辑
// ==========================================

pub mod coercion;
pub mod contract;
pub mod decision;
pub mod request;
pub mod types;

// 重导出核心类型
pub use contract::{ContractLine, PriceReference};
pub use decision::{Decision, EmailDraft};
pub use request::{is_cast_iron, PurchaseForm, PurchaseRequest};
pub use types::{Channel, Package, RuleFamily};
