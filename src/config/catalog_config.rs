use crate::core::catalog::VillaCatalog;
use crate::core::ledger::LedgerPolicy;
use crate::domain::model::{StayDraft, Villa};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub ledger: LedgerPolicy,
    pub villas: Vec<Villa>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入別墅設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析別墅設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.ledger
    }

    /// 驗證後轉成目錄，之後不可再修改
    pub fn into_catalog(self) -> Result<VillaCatalog> {
        VillaCatalog::new(self.villas)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerPolicy::default(),
            villas: VillaCatalog::estate_2025().list().to_vec(),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        VillaCatalog::new(self.villas.clone()).map(|_| ())
    }
}

/// 依序套用到帳本的住宿清單
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StayPlan {
    #[serde(default)]
    pub stays: Vec<StayDraft>,
}

impl StayPlan {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// 替換環境變數 (例如 ${VILLA_URL})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
        message: format!("Invalid placeholder pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}
