//! # Config Commands

use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// Display settings the UI needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    pub currency_symbol: String,
    pub top_companies_limit: usize,
    pub recent_expenses_limit: usize,
}

pub fn get_config(config: &ConfigState) -> ConfigDto {
    debug!("get_config command");
    ConfigDto {
        currency_symbol: config.currency_symbol.clone(),
        top_companies_limit: config.top_companies_limit,
        recent_expenses_limit: config.recent_expenses_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_mirrors_state() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            top_companies_limit: 3,
            seed_mock_data: false,
            recent_expenses_limit: 8,
        };
        let dto = get_config(&config);
        assert_eq!(dto.currency_symbol, "€");
        assert_eq!(dto.top_companies_limit, 3);
        assert_eq!(dto.recent_expenses_limit, 8);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["topCompaniesLimit"], 3);
        assert!(json.get("seedMockData").is_none());
    }
}
