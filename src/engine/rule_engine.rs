// ==========================================
// 管道采购决策支持 - 采购规则引擎
// ==========================================
// 职责: 按材质分派规则族，按严格优先级选出唯一规则
// 红线: 首个命中即返回，不向下穿透；所有规则必须输出 reason
// 输出: RuleOutcome（是否需要查价由调用方根据 verdict 决定）
// ==========================================

use crate::domain::types::RuleFamily;
use crate::domain::PurchaseRequest;
use crate::engine::rule_core::{CastIronRules, GenericPipeRules};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// RuleVerdict - 命中规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleVerdict {
    // ===== 通用管材 =====
    TouretOverride,     // 需查卷盘合同行；无 → 转品类经理
    ManufacturerDirect, // 厂家询价 + 附参考价
    DistributorDirect,  // 经销商询价
    ContractFramework,  // 需查合同价；无 → 转品类经理

    // ===== 球墨铸铁管 =====
    CastIronFactoryDirect,
    CastIronContract,
    CastIronDistributor,

    // ===== 兜底 =====
    Escalate,
}

impl RuleVerdict {
    /// 是否需要查询合同价格
    pub fn requires_pricing(&self) -> bool {
        matches!(
            self,
            RuleVerdict::ManufacturerDirect | RuleVerdict::ContractFramework
        )
    }
}

/// 规则判定结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub family: RuleFamily,
    pub verdict: RuleVerdict,
    pub reasons: Vec<String>,
}

impl RuleOutcome {
    fn new(family: RuleFamily, verdict: RuleVerdict, reason: String) -> Self {
        Self {
            family,
            verdict,
            reasons: vec![reason],
        }
    }
}

// ==========================================
// RuleEngine - 规则引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RuleEngine {
    // 厂家直采是否包含 barre 且 DE > 315 子条件
    large_bar_manufacturer_clause: bool,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RuleEngine {
    pub fn new(large_bar_manufacturer_clause: bool) -> Self {
        Self {
            large_bar_manufacturer_clause,
        }
    }

    /// 评估请求，返回唯一命中规则
    pub fn evaluate(&self, request: &PurchaseRequest) -> RuleOutcome {
        let outcome = match request.rule_family() {
            RuleFamily::CastIron => self.evaluate_cast_iron(request),
            RuleFamily::GenericPipe => self.evaluate_generic(request),
        };
        debug!(
            family = %outcome.family,
            verdict = ?outcome.verdict,
            reasons = ?outcome.reasons,
            "规则判定完成"
        );
        outcome
    }

    /// 通用管材: 卷盘 → 厂家 → 经销商 → 框架合同 → 兜底
    fn evaluate_generic(&self, request: &PurchaseRequest) -> RuleOutcome {
        let family = RuleFamily::GenericPipe;
        let package = &request.package;
        let de = request.outer_diameter;
        let qty = request.quantity;

        // 规则 1: 卷盘专项，忽略数量与压力
        if GenericPipeRules::is_touret(package) {
            return RuleOutcome::new(
                family,
                RuleVerdict::TouretOverride,
                format!("TOURET_OVERRIDE: package=touret, DE={}", de),
            );
        }

        // 规则 2: 厂家直采
        let large_bar_clause = self.large_bar_manufacturer_clause;
        if GenericPipeRules::is_manufacturer_direct(qty, package, de, large_bar_clause) {
            return RuleOutcome::new(
                family,
                RuleVerdict::ManufacturerDirect,
                format!("MANUFACTURER_DIRECT: package={}, DE={}, quantity={}", package, de, qty),
            );
        }

        // 规则 3: 经销商直采
        if GenericPipeRules::is_distributor_direct(qty, package, de) {
            return RuleOutcome::new(
                family,
                RuleVerdict::DistributorDirect,
                format!("DISTRIBUTOR_DIRECT: package={}, DE={}, quantity={}", package, de, qty),
            );
        }

        // 规则 4: 框架合同
        if GenericPipeRules::is_contract_framework(qty, package, de) {
            return RuleOutcome::new(
                family,
                RuleVerdict::ContractFramework,
                format!("CONTRACT_FRAMEWORK: package={}, DE={}, quantity={}", package, de, qty),
            );
        }

        // 规则 5: 兜底
        RuleOutcome::new(
            family,
            RuleVerdict::Escalate,
            format!("ESCALATE: no rule matched (package={}, DE={}, quantity={})", package, de, qty),
        )
    }

    /// 球墨铸铁管: 厂家 → 合同价 → 经销商 → 兜底
    fn evaluate_cast_iron(&self, request: &PurchaseRequest) -> RuleOutcome {
        let family = RuleFamily::CastIron;
        let de = request.outer_diameter;
        let qty = request.quantity;

        // 规则 1: 厂家直采（DE ≥ 80 且超出全部合同档位）
        if CastIronRules::is_factory_direct(qty, de) {
            return RuleOutcome::new(
                family,
                RuleVerdict::CastIronFactoryDirect,
                format!(
                    "CAST_IRON_FACTORY_DIRECT: DE={}, quantity={} exceeds every contract tier",
                    de, qty
                ),
            );
        }

        // 规则 2: 合同价
        if let Some((min_de, max_qty)) = CastIronRules::matching_tier(qty, de) {
            return RuleOutcome::new(
                family,
                RuleVerdict::CastIronContract,
                format!(
                    "CAST_IRON_CONTRACT: DE={} >= {}, quantity={} <= {}",
                    de, min_de, qty, max_qty
                ),
            );
        }

        // 规则 3: 经销商直采
        if CastIronRules::is_distributor_direct(de) {
            return RuleOutcome::new(
                family,
                RuleVerdict::CastIronDistributor,
                format!("CAST_IRON_DISTRIBUTOR: DE={} < 80", de),
            );
        }

        // 规则 4: 兜底
        RuleOutcome::new(
            family,
            RuleVerdict::Escalate,
            format!("ESCALATE: no cast iron rule matched (DE={}, quantity={})", de, qty),
        )
    }
}
