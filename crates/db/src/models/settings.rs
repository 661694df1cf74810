//! Mess-wide settings (singleton).

use dineflow_core::types::Amount;
use serde::{Deserialize, Serialize};

use crate::entity::SingletonEntity;
use crate::seed;

/// Monthly fee and the house rules shown to students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessSettings {
    pub monthly_amount: Amount,
    /// Rules in display order.
    #[serde(default)]
    pub rules: Vec<String>,
}

impl MessSettings {
    /// Trim rules and drop blank ones, keeping their order.
    pub fn normalized(mut self) -> Self {
        self.rules = self
            .rules
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        self
    }
}

impl SingletonEntity for MessSettings {
    const NAME: &'static str = "settings";

    fn seed_data() -> Option<Self> {
        Some(seed::settings())
    }
}
