// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use pipe_purchase_advisor::{ContractLine, PurchaseForm};
use std::io::Write;
use tempfile::NamedTempFile;

/// 固定决策日期，保证有效期过滤结果稳定
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

// ==========================================
// ContractLine 构建器
// ==========================================

pub struct ContractLineBuilder {
    material: String,
    package: String,
    outer_diameter: u32,
    nominal_pressure: f64,
    supplier: String,
    price: f64,
    valid_until: NaiveDate,
}

impl ContractLineBuilder {
    pub fn new(material: &str) -> Self {
        Self {
            material: material.to_string(),
            package: "barre".to_string(),
            outer_diameter: 250,
            nominal_pressure: 16.0,
            supplier: "Elydan".to_string(),
            price: 10.0,
            valid_until: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        }
    }

    pub fn package(mut self, package: &str) -> Self {
        self.package = package.to_string();
        self
    }

    pub fn outer_diameter(mut self, de: u32) -> Self {
        self.outer_diameter = de;
        self
    }

    pub fn nominal_pressure(mut self, pn: f64) -> Self {
        self.nominal_pressure = pn;
        self
    }

    pub fn supplier(mut self, supplier: &str) -> Self {
        self.supplier = supplier.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = date;
        self
    }

    pub fn build(self) -> ContractLine {
        ContractLine {
            material: self.material,
            package: self.package,
            outer_diameter: self.outer_diameter,
            nominal_pressure: self.nominal_pressure,
            supplier: self.supplier,
            price: self.price,
            valid_until: self.valid_until,
        }
    }
}

// ==========================================
// 表单构建
// ==========================================

pub fn form(material: &str, package: &str, de: &str, pn: &str, quantity: u64) -> PurchaseForm {
    PurchaseForm {
        material: material.to_string(),
        package: package.to_string(),
        outer_diameter: de.to_string(),
        nominal_pressure: pn.to_string(),
        quantity,
    }
}

// ==========================================
// 合同 CSV 文件
// ==========================================

pub const CONTRACT_HEADER: &str = "Material,Package,DE,PN,Supplier,Price,Valid_Until";

/// 写入临时合同 CSV（首行为表头）
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_contract_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp csv");
    writeln!(file, "{}", CONTRACT_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

/// 标准样例合同数据
pub fn sample_contract_rows() -> Vec<&'static str> {
    vec![
        "PVC,barre,250,16,Elydan,42.10,2030-12-31",
        "PVC,barre,250,16,Centraltubi,39.80,2030-12-31",
        "PVC,barre,250,16,Tubes Ouest,45.00,2030-12-31",
        "PVC,barre,250,16,Ancien Fournisseur,12.00,2024-12-31",
        "PVC,barre,160,10,Elydan,18.40,2030-12-31",
        "PEHD,touret,110,10,Elydan,5.20,2030-12-31",
        "Fonte ductile,barre,150,16,Electrosteel,61.00,2030-12-31",
    ]
}
