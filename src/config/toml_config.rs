use crate::core::form::CancellationForm;
use crate::core::report::DEFAULT_CURRENCY_SYMBOL;
use crate::utils::error::{RefundError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub pricing: PricingConfig,
    pub display: DisplayConfig,
}

/// 預設價格，CLI 沒有提供時使用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub annual_price: Option<f64>,
    pub monthly_no_commitment_price: Option<f64>,
    pub daily_membership_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RefundError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RefundError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ANNUAL_PRICE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RefundError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let prices = [
            ("pricing.annual_price", self.pricing.annual_price),
            (
                "pricing.monthly_no_commitment_price",
                self.pricing.monthly_no_commitment_price,
            ),
            (
                "pricing.daily_membership_price",
                self.pricing.daily_membership_price,
            ),
        ];
        for (field, price) in prices {
            if let Some(price) = price {
                validate_non_negative(field, price)?;
            }
        }

        validate_non_empty_string("display.currency_symbol", &self.display.currency_symbol)?;
        Ok(())
    }

    pub fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }

    /// 以預設價格補上表單中空白的價格欄位
    pub fn apply_defaults(&self, form: &mut CancellationForm) {
        fill_missing(&mut form.annual_price, self.pricing.annual_price);
        fill_missing(
            &mut form.monthly_no_commitment_price,
            self.pricing.monthly_no_commitment_price,
        );
        fill_missing(
            &mut form.daily_membership_price,
            self.pricing.daily_membership_price,
        );
    }
}

fn fill_missing(field: &mut Option<String>, default: Option<f64>) {
    let is_empty = field.as_deref().map_or(true, |v| v.trim().is_empty());
    if let (true, Some(value)) = (is_empty, default) {
        *field = Some(value.to_string());
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
