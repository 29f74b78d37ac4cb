// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持法语（默认）和英语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 消息一律按显式 locale 翻译，不依赖全局 locale
// ==========================================

/// 是否存在该语言的翻译文件
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}

/// 按指定语言翻译（带参数）
///
/// # 示例
/// ```no_run
/// use pipe_purchase_advisor::i18n::t_in;
/// let msg = t_in("fr", "decision.escalate", &[("manager", "Zélie XIA")]);
/// ```
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key, locale = locale).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
