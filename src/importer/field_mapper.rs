// ==========================================
// 管道采购决策支持 - 字段映射器实现
// ==========================================
// 职责: 源列 → ContractLine 字段映射 + 类型转换
// 必需列: Material, Package, DE, PN, Supplier, Price, Valid_Until
// 口径: DE 非负整数 / PN 有限浮点 / Price 有限浮点（不截断，不容差）
// ==========================================

use crate::domain::coercion::{parse_nominal_pressure, parse_outer_diameter, parse_price};
use crate::domain::ContractLine;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper, RawRecord};
use chrono::{Duration, NaiveDate, NaiveDateTime};

// 标准列名
pub const COL_MATERIAL: &str = "Material";
pub const COL_PACKAGE: &str = "Package";
pub const COL_DE: &str = "DE";
pub const COL_PN: &str = "PN";
pub const COL_SUPPLIER: &str = "Supplier";
pub const COL_PRICE: &str = "Price";
pub const COL_VALID_UNTIL: &str = "Valid_Until";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_MATERIAL,
    COL_PACKAGE,
    COL_DE,
    COL_PN,
    COL_SUPPLIER,
    COL_PRICE,
    COL_VALID_UNTIL,
];

/// 标准列名的可接受别名
pub fn column_aliases(key: &str) -> Vec<&str> {
    match key {
        COL_MATERIAL => vec![COL_MATERIAL, "Matériau", "Materiau"],
        COL_PACKAGE => vec![COL_PACKAGE, "Conditionnement"],
        COL_SUPPLIER => vec![COL_SUPPLIER, "Fournisseur"],
        COL_PRICE => vec![COL_PRICE, "Prix"],
        COL_VALID_UNTIL => vec![COL_VALID_UNTIL, "Valid Until", "Validite"],
        _ => vec![key],
    }
}

pub struct ContractFieldMapper;

impl FieldMapper for ContractFieldMapper {
    fn map_to_contract_line(&self, record: &RawRecord) -> ImportResult<ContractLine> {
        let row = record.row_number;

        let outer_diameter_raw = self.require(record, COL_DE)?;
        let outer_diameter = parse_outer_diameter(&outer_diameter_raw).ok_or_else(|| {
            ImportError::TypeConversionError {
                row,
                field: COL_DE.to_string(),
                message: format!("DE doit être un entier positif : {}", outer_diameter_raw),
            }
        })?;

        let pressure_raw = self.require(record, COL_PN)?;
        let nominal_pressure = parse_nominal_pressure(&pressure_raw).ok_or_else(|| {
            ImportError::TypeConversionError {
                row,
                field: COL_PN.to_string(),
                message: format!("PN non numérique : {}", pressure_raw),
            }
        })?;

        let price_raw = self.require(record, COL_PRICE)?;
        let price = parse_price(&price_raw).ok_or_else(|| ImportError::TypeConversionError {
            row,
            field: COL_PRICE.to_string(),
            message: format!("prix non numérique : {}", price_raw),
        })?;

        let valid_raw = self.require(record, COL_VALID_UNTIL)?;
        let valid_until = parse_date(&valid_raw).ok_or_else(|| ImportError::DateFormatError {
            row,
            field: COL_VALID_UNTIL.to_string(),
            value: valid_raw.clone(),
        })?;

        Ok(ContractLine {
            material: self.require(record, COL_MATERIAL)?,
            // 铸铁合同行可能未填包装
            package: self.get_string(record, COL_PACKAGE).unwrap_or_default(),
            outer_diameter,
            nominal_pressure,
            supplier: self.require(record, COL_SUPPLIER)?,
            price,
            valid_until,
        })
    }
}

impl ContractFieldMapper {
    /// 提取字符串字段（空值 → None），支持列名别名
    fn get_string(&self, record: &RawRecord, key: &str) -> Option<String> {
        for alias in column_aliases(key) {
            if let Some(v) = record.fields.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    fn require(&self, record: &RawRecord, key: &str) -> ImportResult<String> {
        self.get_string(record, key)
            .ok_or_else(|| ImportError::FieldMissing {
                row: record.row_number,
                field: key.to_string(),
            })
    }
}

/// 解析有效期
///
/// 接受 YYYY-MM-DD / YYYYMMDD / DD/MM/YYYY / ISO 日期时间 / Excel 序列日
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    for format in ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }

    // Excel 1900 日期系统: 序列日 1 = 1900-01-01（基准取 1899-12-30 抵消闰年缺陷）
    let serial = value.parse::<f64>().ok()?;
    if !(1.0..=2_958_465.0).contains(&serial) {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(Duration::days(serial.floor() as i64))
}
