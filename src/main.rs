// ==========================================
// 管道采购决策支持 - 命令行入口
// ==========================================
// 用法:
//   pipe-advisor <matériau> <conditionnement> <DE> <PN> [quantité]
//                [--json] [--log-json] [--as-of AAAA-MM-JJ]
//                [--contracts FICHIER] [--config FICHIER]
//   pipe-advisor --options [--contracts FICHIER] [--config FICHIER]
//
// stdout: 决策结果 / stderr: 日志
// 退出码: 0 成功, 1 数据或配置错误, 2 输入不完整或无效（含参数解析错误）
// ==========================================

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use pipe_purchase_advisor::config::ConfigManager;
use pipe_purchase_advisor::domain::coercion::format_pressure;
use pipe_purchase_advisor::i18n::t_in;
use pipe_purchase_advisor::{logging, ApiError, Decision, DecisionFacade, PurchaseForm};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pipe-advisor")]
#[command(about = "SADE Purchasing Decision - canal d'achat et prix contractuels")]
#[command(version)]
struct Cli {
    /// Matériau (ex. PVC, PEHD, Fonte ductile)
    #[arg(required_unless_present = "options")]
    material: Option<String>,
    /// Conditionnement (couronne, barre, touret)
    #[arg(required_unless_present = "options")]
    package: Option<String>,
    /// Diamètre extérieur
    #[arg(required_unless_present = "options")]
    de: Option<String>,
    /// Pression nominale
    #[arg(required_unless_present = "options")]
    pn: Option<String>,
    /// Quantité en mètres linéaires
    quantity: Option<u64>,

    /// Sortie JSON de la décision
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Journaux au format JSON
    #[arg(long = "log-json", default_value_t = false)]
    log_json: bool,
    /// Liste les valeurs disponibles (matériaux, DE, PN)
    #[arg(long, default_value_t = false)]
    options: bool,
    /// Date de référence pour la validité des contrats (AAAA-MM-JJ)
    #[arg(long = "as-of", value_parser = parse_as_of)]
    as_of: Option<NaiveDate>,
    /// Fichier de contrats (.xlsx/.xls/.csv)
    #[arg(long)]
    contracts: Option<PathBuf>,
    /// Fichier de configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_as_of(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("date invalide (AAAA-MM-JJ attendu) : {}", e))
}

fn main() -> ExitCode {
    // 参数错误由 clap 输出提示并以退出码 2 结束
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let manager =
        ConfigManager::load(cli.config.as_deref()).context("chargement de la configuration")?;
    let mut config = manager.into_config();
    if let Some(contracts) = cli.contracts.clone() {
        config.contracts_path = contracts;
    }
    let locale = config.locale.clone();

    tracing::info!(
        "{} v{}",
        pipe_purchase_advisor::APP_NAME,
        pipe_purchase_advisor::VERSION
    );

    let facade = match DecisionFacade::from_config(config) {
        Ok(facade) => facade,
        Err(e) => {
            eprintln!("{}", e.user_message(&locale));
            return Ok(ExitCode::from(1));
        }
    };

    if cli.options {
        print_options(&facade, &locale);
        return Ok(ExitCode::SUCCESS);
    }

    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let json = cli.json;
    let form = cli.into_form();

    match facade.decide(&form, as_of) {
        Ok(decision) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                print_decision(&decision, &locale);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (ApiError::IncompleteRequest { .. } | ApiError::InvalidField { .. })) => {
            eprintln!("{}", e.user_message(&locale));
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}

impl Cli {
    /// 位置参数 → 表单（缺失值留空，由决策门面报告不完整）
    fn into_form(self) -> PurchaseForm {
        PurchaseForm {
            material: self.material.unwrap_or_default(),
            package: self.package.unwrap_or_default(),
            outer_diameter: self.de.unwrap_or_default(),
            nominal_pressure: self.pn.unwrap_or_default(),
            quantity: self.quantity.unwrap_or(0),
        }
    }
}

fn print_decision(decision: &Decision, locale: &str) {
    println!("{}", decision.message);

    if let Some(email) = &decision.email {
        println!();
        println!("{}", t_in(locale, "cli.email_header", &[]));
        println!("{} : {}", t_in(locale, "cli.recipient", &[]), email.recipient);
        println!("{} : {}", t_in(locale, "cli.subject", &[]), email.subject);
        println!();
        println!("{}", email.body);
    }
}

fn print_options(facade: &DecisionFacade, locale: &str) {
    let store = facade.store();

    println!("{} :", t_in(locale, "cli.options_materials", &[]));
    for material in store.materials() {
        println!("  {}", material);
    }

    let diameters: Vec<String> = store
        .outer_diameters()
        .iter()
        .map(|d| d.to_string())
        .collect();
    println!(
        "{} : {}",
        t_in(locale, "cli.options_diameters", &[]),
        diameters.join(", ")
    );

    let pressures: Vec<String> = store
        .nominal_pressures()
        .iter()
        .map(|p| format_pressure(*p))
        .collect();
    println!(
        "{} : {}",
        t_in(locale, "cli.options_pressures", &[]),
        pressures.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "pipe-advisor", "PVC", "barre", "250", "16", "2500", "--json", "--as-of", "2025-06-01",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(!cli.options);
        assert_eq!(cli.as_of, NaiveDate::from_ymd_opt(2025, 6, 1));

        let form = cli.into_form();
        assert_eq!(form.material, "PVC");
        assert_eq!(form.outer_diameter, "250");
        assert_eq!(form.quantity, 2500);
    }

    #[test]
    fn test_quantity_defaults_to_zero() {
        let cli = Cli::try_parse_from(["pipe-advisor", "PEHD", "touret", "110", "16"]).unwrap();
        assert_eq!(cli.into_form().quantity, 0);
    }

    #[test]
    fn test_options_without_positionals() {
        let cli =
            Cli::try_parse_from(["pipe-advisor", "--options", "--contracts", "b.csv"]).unwrap();
        assert!(cli.options);
        assert_eq!(cli.contracts, Some(PathBuf::from("b.csv")));
    }

    #[test]
    fn test_invalid_quantity_is_usage_error() {
        let err = Cli::try_parse_from(["pipe-advisor", "PVC", "barre", "250", "16", "beaucoup"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_rejects_bad_input() {
        let unknown = Cli::try_parse_from(["pipe-advisor", "--verbose"]).unwrap_err();
        assert_eq!(unknown.exit_code(), 2);

        let missing = Cli::try_parse_from(["pipe-advisor", "PVC", "barre"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let bad_date = Cli::try_parse_from([
            "pipe-advisor", "PVC", "barre", "250", "16", "--as-of", "01/06/2025",
        ])
        .unwrap_err();
        assert_eq!(bad_date.exit_code(), 2);
    }
}
