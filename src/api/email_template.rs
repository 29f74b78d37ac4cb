// ==========================================
// 管道采购决策支持 - 询价邮件模板
// ==========================================
// 面向供应商，固定法语模板
// mailto 链接与按钮由 UI 负责
// ==========================================

use crate::domain::coercion::format_pressure;
use crate::domain::{EmailDraft, PurchaseRequest};

/// 生成询价邮件草稿
///
/// # 参数
/// - recipient: 收件方（目标供应商）
/// - request: 已校验请求
pub fn build_consultation_email(recipient: &str, request: &PurchaseRequest) -> EmailDraft {
    let pn = format_pressure(request.nominal_pressure);
    let subject = format!(
        "Demande de prix - {} - DE{} PN{}",
        request.material, request.outer_diameter, pn
    );

    let body = format!(
        "Bonjour,

Dans le cadre d'un nouveau projet, nous souhaiterions obtenir votre meilleure offre de prix et délai pour le matériel suivant :

- Produit : {material}
- Diamètre Extérieur (DE) : {de}
- Pression Nominale (PN) : {pn}
- Conditionnement : {package}
- Quantité : {quantity} ml

Merci de nous préciser également :
1. Vos frais de transport Franco.
2. Votre délai de fabrication/livraison actuel.

Dans l'attente de votre retour, je reste à votre disposition.

Cordialement,
[Votre Signature]",
        material = request.material,
        de = request.outer_diameter,
        pn = pn,
        package = request.package,
        quantity = request.quantity,
    );

    EmailDraft {
        recipient: recipient.to_string(),
        subject,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_interpolates_request() {
        let request = PurchaseRequest::new("PVC", "barre", 250, 16.0, 2500, "fonte");
        let draft = build_consultation_email("Elydan", &request);

        assert_eq!(draft.recipient, "Elydan");
        assert_eq!(draft.subject, "Demande de prix - PVC - DE250 PN16");
        assert!(draft.body.starts_with("Bonjour,"));
        assert!(draft.body.contains("- Diamètre Extérieur (DE) : 250"));
        assert!(draft.body.contains("- Conditionnement : barre"));
        assert!(draft.body.contains("- Quantité : 2500 ml"));
        assert!(draft.body.ends_with("[Votre Signature]"));
    }

    #[test]
    fn test_email_decimal_pressure() {
        let request = PurchaseRequest::new("PEHD", "couronne", 63, 12.5, 300, "fonte");
        let draft = build_consultation_email("votre contact Commercial", &request);
        assert_eq!(draft.subject, "Demande de prix - PEHD - DE63 PN12.5");
    }
}
