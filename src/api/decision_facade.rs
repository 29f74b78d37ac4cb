// ==========================================
// 管道采购决策支持 - 决策门面
// ==========================================
// 职责: 表单校验 → 规则判定 → 按需查价 → 组装决策 + 邮件草稿
// 输入: PurchaseForm（UI 原始值）或 PurchaseRequest（已校验）
// 输出: Decision（不落库，相同输入结果相同）
// ==========================================

use crate::api::email_template::build_consultation_email;
use crate::api::error::{ApiError, ApiResult};
use crate::config::{AdvisorConfig, ConfigManager};
use crate::domain::coercion::{parse_nominal_pressure, parse_outer_diameter};
use crate::domain::types::Channel;
use crate::domain::{Decision, PriceReference, PurchaseForm, PurchaseRequest};
use crate::engine::{PriceResolver, RuleEngine, RuleVerdict};
use crate::i18n::t_in;
use crate::repository::ContractStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

// ==========================================
// DecisionFacade - 决策门面
// ==========================================
pub struct DecisionFacade {
    store: Arc<ContractStore>,
    rule_engine: RuleEngine,
    price_resolver: PriceResolver,
    config: AdvisorConfig,
}

impl DecisionFacade {
    /// 创建决策门面
    ///
    /// # 参数
    /// - store: 已加载的合同数据（进程内只读共享）
    /// - config: 决策配置
    pub fn new(store: Arc<ContractStore>, config: AdvisorConfig) -> Self {
        Self {
            rule_engine: RuleEngine::new(config.large_bar_manufacturer_clause),
            price_resolver: PriceResolver::new(Arc::clone(&store)),
            store,
            config,
        }
    }

    /// 按配置中的合同文件路径加载数据并创建门面
    ///
    /// # 返回
    /// - Err(ApiError::Config): 配置校验失败
    /// - Err(ApiError::DataUnavailable): 合同数据无法读取，会话不可继续
    pub fn from_config(config: AdvisorConfig) -> ApiResult<Self> {
        ConfigManager::validate(&config)?;
        let store = ContractStore::load(&config.contracts_path)?;
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn store(&self) -> &ContractStore {
        &self.store
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    // ==========================================
    // 决策入口
    // ==========================================

    /// 从表单输入生成决策
    ///
    /// # 返回
    /// - Err(IncompleteRequest): material/package/DE/PN 任一为空，规则不执行
    /// - Err(InvalidField): DE/PN 无法按口径转换
    pub fn decide(&self, form: &PurchaseForm, as_of: NaiveDate) -> ApiResult<Decision> {
        let request = self.build_request(form)?;
        Ok(self.decide_request(&request, as_of))
    }

    /// 校验表单并构造请求
    pub fn build_request(&self, form: &PurchaseForm) -> ApiResult<PurchaseRequest> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "请求字段不完整");
            return Err(ApiError::IncompleteRequest {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let outer_diameter =
            parse_outer_diameter(&form.outer_diameter).ok_or_else(|| ApiError::InvalidField {
                field: "outer_diameter".to_string(),
                value: form.outer_diameter.clone(),
            })?;
        let nominal_pressure =
            parse_nominal_pressure(&form.nominal_pressure).ok_or_else(|| ApiError::InvalidField {
                field: "nominal_pressure".to_string(),
                value: form.nominal_pressure.clone(),
            })?;

        Ok(PurchaseRequest::new(
            &form.material,
            &form.package,
            outer_diameter,
            nominal_pressure,
            form.quantity,
            &self.config.cast_iron_token,
        ))
    }

    /// 对已校验请求生成决策
    #[instrument(skip(self, request), fields(
        material = %request.material,
        package = %request.package,
        de = request.outer_diameter,
        quantity = request.quantity
    ))]
    pub fn decide_request(&self, request: &PurchaseRequest, as_of: NaiveDate) -> Decision {
        let outcome = self.rule_engine.evaluate(request);
        let mut reasons = outcome.reasons;
        let suppliers = &self.config.suppliers;

        // 仅厂家直采与框架合同查询合同价
        let priced = if outcome.verdict.requires_pricing() {
            self.resolve_prices(request, as_of, &mut reasons)
        } else {
            Vec::new()
        };

        let (channel, message, target_supplier, price_references) = match outcome.verdict {
            // ===== 通用管材 =====
            RuleVerdict::TouretOverride => {
                match self
                    .price_resolver
                    .touret_reference(&request.material, request.outer_diameter)
                {
                    Some(reference) => {
                        reasons.push(format!(
                            "TOURET_LINE_FOUND: supplier={}",
                            reference.supplier
                        ));
                        let references = vec![reference];
                        let message = format!(
                            "{}\n{}",
                            self.text(
                                "decision.touret_special",
                                &[("supplier", &suppliers.pipe_manufacturer)]
                            ),
                            self.price_block(&references)
                        );
                        (
                            Channel::TouretSpecial,
                            message,
                            Some(suppliers.pipe_manufacturer.clone()),
                            references,
                        )
                    }
                    None => {
                        warn!("无卷盘合同行，转品类经理");
                        reasons.push("TOURET_LINE_MISSING: escalate".to_string());
                        (
                            Channel::Escalate,
                            self.text(
                                "decision.touret_escalate",
                                &[("manager", &self.config.category_manager)],
                            ),
                            None,
                            Vec::new(),
                        )
                    }
                }
            }
            RuleVerdict::ManufacturerDirect => {
                let references = priced;
                let mut message = self.text(
                    "decision.manufacturer",
                    &[("manufacturers", &suppliers.pipe_manufacturers_label)],
                );
                if !references.is_empty() {
                    message.push_str("\n\n");
                    message.push_str(&self.price_block(&references));
                }
                (
                    Channel::ManufacturerConsult,
                    message,
                    Some(suppliers.pipe_manufacturer.clone()),
                    references,
                )
            }
            RuleVerdict::DistributorDirect => (
                Channel::DistributorConsult,
                self.text("decision.distributor", &[]),
                Some(suppliers.distributor_contact.clone()),
                Vec::new(),
            ),
            RuleVerdict::ContractFramework => {
                let references = priced;
                match references.first().map(|best| best.supplier.clone()) {
                    Some(best_supplier) => {
                        let message = format!(
                            "{}\n\n{}\n{}",
                            self.text("decision.contract", &[]),
                            self.price_block(&references),
                            self.text(
                                "decision.contract_stock_note",
                                &[("supplier", &suppliers.pipe_manufacturer)]
                            )
                        );
                        (Channel::ContractPricing, message, Some(best_supplier), references)
                    }
                    // 无有效合同价可报 → 转品类经理
                    None => (
                        Channel::Escalate,
                        self.escalate_message(),
                        None,
                        Vec::new(),
                    ),
                }
            }

            // ===== 球墨铸铁管（不查行级价格）=====
            RuleVerdict::CastIronFactoryDirect => (
                Channel::ManufacturerConsult,
                self.text(
                    "decision.cast_iron_factory",
                    &[("supplier", &suppliers.cast_iron_manufacturer)],
                ),
                Some(suppliers.cast_iron_manufacturer.clone()),
                Vec::new(),
            ),
            RuleVerdict::CastIronContract => (
                Channel::ContractPricing,
                self.text(
                    "decision.cast_iron_contract",
                    &[("supplier", &suppliers.cast_iron_manufacturer)],
                ),
                Some(suppliers.cast_iron_manufacturer.clone()),
                Vec::new(),
            ),
            RuleVerdict::CastIronDistributor => (
                Channel::DistributorConsult,
                self.text("decision.cast_iron_distributor", &[]),
                Some(suppliers.distributor_contact.clone()),
                Vec::new(),
            ),

            // ===== 兜底 =====
            RuleVerdict::Escalate => (Channel::Escalate, self.escalate_message(), None, Vec::new()),
        };

        let email = if channel.implies_consultation() {
            target_supplier
                .as_deref()
                .map(|recipient| build_consultation_email(recipient, request))
        } else {
            None
        };

        info!(channel = %channel, references = price_references.len(), "决策完成");

        Decision {
            channel,
            message,
            target_supplier,
            price_references,
            reasons,
            email,
        }
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn resolve_prices(
        &self,
        request: &PurchaseRequest,
        as_of: NaiveDate,
        reasons: &mut Vec<String>,
    ) -> Vec<PriceReference> {
        let references = self.price_resolver.resolve(
            &request.material,
            request.outer_diameter,
            request.nominal_pressure,
            as_of,
            self.config.top_n,
        );
        if references.is_empty() {
            warn!("无有效合同价格");
            reasons.push(format!("NO_PRICE_FOUND: as_of={}", as_of));
        } else {
            reasons.push(format!("PRICE_FOUND: {} reference(s)", references.len()));
        }
        references
    }

    fn price_block(&self, references: &[PriceReference]) -> String {
        let mut lines = vec![self.text("price.header", &[])];
        for reference in references {
            let price = format!("{:.2}", reference.price);
            lines.push(self.text(
                "price.line",
                &[("supplier", &reference.supplier), ("price", &price)],
            ));
        }
        lines.join("\n")
    }

    fn escalate_message(&self) -> String {
        self.text("decision.escalate", &[("manager", &self.config.category_manager)])
    }

    fn text(&self, key: &str, args: &[(&str, &String)]) -> String {
        let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        t_in(&self.config.locale, key, &args)
    }
}
