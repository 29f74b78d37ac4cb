// ==========================================
// 管道采购决策支持 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务规则
// ==========================================
// 职责: 持有只读合同数据，提供过滤查询
// ==========================================

pub mod contract_store;

// 重导出核心仓储
pub use contract_store::ContractStore;
