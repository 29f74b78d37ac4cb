// ==========================================
// 管道采购决策支持 - 核心库
// ==========================================
// 职责: 采购渠道判定 (经销商/框架合同/厂家/品类经理) + 合同价格参考
// 系统定位: 决策支持系统 (人工最终控制权)
// 边界: 表单渲染/邮件按钮属于外部 UI，不在本库内
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "fr");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 合同数据文件读取
pub mod importer;

// 数据仓储层 - 合同数据只读存储
pub mod repository;

// 引擎层 - 采购规则与价格排序
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// API 层 - 决策门面
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Channel, Package, RuleFamily};

// 领域实体
pub use domain::{ContractLine, Decision, EmailDraft, PriceReference, PurchaseForm, PurchaseRequest};

// 仓储
pub use repository::ContractStore;

// 引擎
pub use engine::{
    CastIronRules, GenericPipeRules, PriceResolver, RuleEngine, RuleOutcome, RuleVerdict,
};

// API
pub use api::{ApiError, DecisionFacade};

// 配置
pub use config::{AdvisorConfig, ConfigManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "SADE Purchasing Decision";
