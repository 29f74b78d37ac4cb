// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成合同价格样例 CSV（列名与 contracts_b.xlsx 一致）
// 输出: tests/fixtures/datasets/contracts_sample.csv（或命令行指定路径）
// ==========================================

use chrono::{Duration, Local};
use csv::Writer;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const CSV_HEADER: &[&str] = &[
    "Material",
    "Package",
    "DE",
    "PN",
    "Supplier",
    "Price",
    "Valid_Until",
];

// 合同记录结构
struct ContractRecord {
    material: &'static str,
    package: &'static str,
    outer_diameter: u32,
    nominal_pressure: &'static str,
    supplier: &'static str,
    price: f64,
    // 相对今天的有效天数，负数表示已过期
    valid_days: i64,
}

fn dataset() -> Vec<ContractRecord> {
    let mut records = Vec::new();

    // PVC / PEHD 直管：两家厂家，价格随口径增长
    for (material, base) in [("PVC", 0.09), ("PEHD", 0.12)] {
        for de in [110u32, 125, 160, 200, 225, 250, 315, 400] {
            for (pn, factor) in [("10", 1.0), ("16", 1.35)] {
                let price = (de as f64 * base * factor * 100.0).round() / 100.0;
                records.push(ContractRecord {
                    material,
                    package: "barre",
                    outer_diameter: de,
                    nominal_pressure: pn,
                    supplier: "Elydan",
                    price,
                    valid_days: 365,
                });
                records.push(ContractRecord {
                    material,
                    package: "barre",
                    outer_diameter: de,
                    nominal_pressure: pn,
                    supplier: "Centraltubi",
                    price: price * 1.04,
                    valid_days: 180,
                });
            }
        }
    }

    // 卷盘：仅 PEHD 小口径
    for de in [63u32, 75, 90, 110] {
        records.push(ContractRecord {
            material: "PEHD",
            package: "touret",
            outer_diameter: de,
            nominal_pressure: "16",
            supplier: "Elydan",
            price: de as f64 * 0.08,
            valid_days: 365,
        });
    }

    // 已过期合同（验证有效期过滤）
    records.push(ContractRecord {
        material: "PVC",
        package: "barre",
        outer_diameter: 250,
        nominal_pressure: "16",
        supplier: "Ancien Fournisseur",
        price: 1.0,
        valid_days: -30,
    });

    // 球墨铸铁管（仅用于下拉选项，规则不查行级价格）
    for de in [80u32, 100, 150, 200, 300] {
        records.push(ContractRecord {
            material: "Fonte ductile",
            package: "barre",
            outer_diameter: de,
            nominal_pressure: "16",
            supplier: "Electrosteel",
            price: de as f64 * 0.35,
            valid_days: 365,
        });
    }

    records
}

fn main() -> Result<(), Box<dyn Error>> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/datasets/contracts_sample.csv"));
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let today = Local::now().date_naive();
    let records = dataset();

    let mut writer = Writer::from_path(&output)?;
    writer.write_record(CSV_HEADER)?;
    for record in &records {
        let valid_until = today + Duration::days(record.valid_days);
        writer.write_record([
            record.material.to_string(),
            record.package.to_string(),
            record.outer_diameter.to_string(),
            record.nominal_pressure.to_string(),
            record.supplier.to_string(),
            format!("{:.2}", record.price),
            valid_until.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer.flush()?;

    println!("✓ {} lignes écrites dans {}", records.len(), output.display());
    Ok(())
}
