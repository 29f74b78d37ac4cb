// ==========================================
// 管道采购决策支持 - 数值口径转换
// ==========================================
// DE: 必须为非负整数（"110" / "110.0" 可接受，"110.5" 拒绝，不截断）
// PN: 有限浮点数，按数值精确相等比较
// 合同数据与请求表单共用同一口径
// ==========================================

/// 解析外径 DE
///
/// # 示例
/// ```
/// use pipe_purchase_advisor::domain::coercion::parse_outer_diameter;
/// assert_eq!(parse_outer_diameter("110"), Some(110));
/// assert_eq!(parse_outer_diameter("110.0"), Some(110));
/// assert_eq!(parse_outer_diameter("110.5"), None);
/// ```
pub fn parse_outer_diameter(value: &str) -> Option<u32> {
    let number = value.trim().replace(',', ".").parse::<f64>().ok()?;
    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 || number > u32::MAX as f64 {
        return None;
    }
    Some(number as u32)
}

/// 解析公称压力 PN
pub fn parse_nominal_pressure(value: &str) -> Option<f64> {
    let number = value.trim().replace(',', ".").parse::<f64>().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number)
}

/// 解析单价（€/ml）
pub fn parse_price(value: &str) -> Option<f64> {
    let number = value.trim().replace(',', ".").parse::<f64>().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number)
}

/// PN 展示格式：整数值不带小数（16），否则原样（12.5）
pub fn format_pressure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
