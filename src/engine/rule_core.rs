// ==========================================
// 管道采购决策支持 - 采购规则纯函数库
// ==========================================
// 职责: 通用管材 / 球墨铸铁管两族渠道准入判定
// 红线: 无状态、无副作用、无 I/O 操作
// 单位: DE 为外径（铸铁为 DN），数量单位为米（ml）
// ==========================================

use crate::domain::types::Package;

/// 铸铁合同数量上限（DE 下限, 数量上限），各档为 OR 关系，边界含等号
pub const CAST_IRON_CONTRACT_TIERS: [(u32, u64); 7] = [
    (80, 968),
    (100, 891),
    (125, 770),
    (150, 594),
    (200, 440),
    (250, 396),
    (300, 264),
];

/// 铸铁经销商/厂家分界 DE
pub const CAST_IRON_MIN_FACTORY_DE: u32 = 80;

// ==========================================
// GenericPipeRules - 通用管材规则
// ==========================================
pub struct GenericPipeRules;

impl GenericPipeRules {
    /// 卷盘专项（最高优先级，绕过全部数值规则）
    pub fn is_touret(package: &Package) -> bool {
        matches!(package, Package::Touret)
    }

    /// 厂家直采
    ///
    /// # 规则
    /// - barre 且 225 ≤ DE ≤ 315 且 数量 ≥ 2000
    /// - touret（已被卷盘专项提前处理，此处保留以对齐原规则）
    /// - barre 且 DE > 315（large_bar_clause 控制，待业务确认）
    pub fn is_manufacturer_direct(
        quantity: u64,
        package: &Package,
        outer_diameter: u32,
        large_bar_clause: bool,
    ) -> bool {
        let is_barre = matches!(package, Package::Barre);
        (is_barre && (225..=315).contains(&outer_diameter) && quantity >= 2000)
            || Self::is_touret(package)
            || (large_bar_clause && is_barre && outer_diameter > 315)
    }

    /// 经销商直采
    ///
    /// # 规则
    /// - couronne
    /// - DE < 125
    /// - DE < 200 且 数量 < 1200
    pub fn is_distributor_direct(quantity: u64, package: &Package, outer_diameter: u32) -> bool {
        matches!(package, Package::Couronne)
            || outer_diameter < 125
            || (outer_diameter < 200 && quantity < 1200)
    }

    /// 框架合同
    ///
    /// # 规则
    /// - barre 且 125 ≤ DE ≤ 200 且 数量 ≥ 1200
    /// - barre 且 225 ≤ DE ≤ 315 且 数量 < 2000
    pub fn is_contract_framework(quantity: u64, package: &Package, outer_diameter: u32) -> bool {
        let is_barre = matches!(package, Package::Barre);
        (is_barre && (125..=200).contains(&outer_diameter) && quantity >= 1200)
            || (is_barre && (225..=315).contains(&outer_diameter) && quantity < 2000)
    }
}

// ==========================================
// CastIronRules - 球墨铸铁管规则
// ==========================================
pub struct CastIronRules;

impl CastIronRules {
    /// 经销商直采：DE < 80
    pub fn is_distributor_direct(outer_diameter: u32) -> bool {
        outer_diameter < CAST_IRON_MIN_FACTORY_DE
    }

    /// 合同价准入：任一档位满足 DE ≥ 下限 且 数量 ≤ 上限
    pub fn is_contract_eligible(quantity: u64, outer_diameter: u32) -> bool {
        Self::matching_tier(quantity, outer_diameter).is_some()
    }

    /// 返回第一个满足的档位（用于输出原因）
    pub fn matching_tier(quantity: u64, outer_diameter: u32) -> Option<(u32, u64)> {
        CAST_IRON_CONTRACT_TIERS
            .iter()
            .copied()
            .find(|&(min_de, max_qty)| outer_diameter >= min_de && quantity <= max_qty)
    }

    /// 厂家直采：DE ≥ 80 且 不满足合同价准入
    pub fn is_factory_direct(quantity: u64, outer_diameter: u32) -> bool {
        outer_diameter >= CAST_IRON_MIN_FACTORY_DE
            && !Self::is_contract_eligible(quantity, outer_diameter)
    }
}
