// ==========================================
// 管道采购决策支持 - API 层
// ==========================================
// 职责: 提供决策门面，供 CLI / UI 调用
// ==========================================

pub mod decision_facade;
pub mod email_template;
pub mod error;

// 重导出核心类型
pub use decision_facade::DecisionFacade;
pub use email_template::build_consultation_email;
pub use error::{ApiError, ApiResult};
