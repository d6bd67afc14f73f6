//! # Dashboard Command
//!
//! Everything the dashboard page shows, in one response.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_dashboard()                                                        │
//! │                                                                         │
//! │  DashboardSummary::build(companies, expenses, invoices, top_n)         │
//! │    ├── expense totals (paid / pending / total)                         │
//! │    ├── invoice totals (invoiced / paid / outstanding)                  │
//! │    ├── top companies  (top_companies_limit bars)                       │
//! │    ├── paid vs pending split with percentages                          │
//! │    └── monthly series                                                   │
//! │  + formatted headline amounts (currency_symbol)                        │
//! │  + recent expenses (recent_expenses_limit rows)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizdesk_core::DashboardSummary;
use serde::Serialize;
use tracing::debug;

use super::expense::{recent_expenses, ExpenseDto};
use crate::state::{ConfigState, StoreState};

/// Headline amounts, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub total_expenses: String,
    pub paid_expenses: String,
    pub pending_expenses: String,
    pub total_invoiced: String,
    pub total_outstanding: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub currency_symbol: String,
    pub summary: DashboardSummary,
    pub formatted: FormattedTotals,
    pub recent_expenses: Vec<ExpenseDto>,
}

pub fn get_dashboard(store: &StoreState, config: &ConfigState) -> DashboardDto {
    debug!("get_dashboard command");
    let summary = store.with_store(|s| {
        DashboardSummary::build(
            s.companies(),
            s.expenses(),
            s.invoices(),
            config.top_companies_limit,
        )
    });

    let formatted = FormattedTotals {
        total_expenses: config.format_money(summary.expenses.total),
        paid_expenses: config.format_money(summary.expenses.paid),
        pending_expenses: config.format_money(summary.expenses.pending),
        total_invoiced: config.format_money(summary.invoices.total_invoiced),
        total_outstanding: config.format_money(summary.invoices.total_outstanding),
    };

    DashboardDto {
        currency_symbol: config.currency_symbol.clone(),
        formatted,
        recent_expenses: recent_expenses(store, config.recent_expenses_limit),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::company::{create_company, CompanyInput};
    use crate::commands::expense::{create_expense, ExpenseInput};
    use crate::error::ErrorCode;
    use bizdesk_core::validation::MAX_AMOUNT;
    use bizdesk_core::{ExpenseStatus, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_seeded_dashboard() {
        let config = ConfigState::default();
        let store = StoreState::from_config(&config);
        let dashboard = get_dashboard(&store, &config);

        assert_eq!(dashboard.summary.company_count, 4);
        assert_eq!(dashboard.summary.invoices.total_outstanding, Money::from_major(6550));
        assert_eq!(dashboard.formatted.total_outstanding, "$6,550.00");
        assert_eq!(dashboard.summary.top_companies.len(), 3);
        assert_eq!(dashboard.recent_expenses.len(), 5);
        assert_eq!(dashboard.recent_expenses[0].description, "Courier fees");
    }

    #[test]
    fn test_limits_follow_config() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            top_companies_limit: 1,
            recent_expenses_limit: 2,
            ..ConfigState::default()
        };
        let store = StoreState::from_config(&config);
        let dashboard = get_dashboard(&store, &config);

        assert_eq!(dashboard.summary.top_companies.len(), 1);
        assert_eq!(dashboard.recent_expenses.len(), 2);
        assert!(dashboard.formatted.total_invoiced.starts_with('€'));
    }

    #[test]
    fn test_oversized_expenses_never_reach_the_totals() {
        let config = ConfigState {
            seed_mock_data: false,
            ..ConfigState::default()
        };
        let store = StoreState::from_config(&config);
        let company = create_company(
            &store,
            CompanyInput {
                name: "Acme".to_string(),
                ..CompanyInput::default()
            },
        )
        .unwrap();

        let huge = || ExpenseInput {
            company_id: company.id.clone(),
            amount: Money::from_cents(i64::MAX / 2 + 1),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            description: "Acquisition".to_string(),
            category: "Capital".to_string(),
            project: None,
            status: ExpenseStatus::Pending,
            payment_date: None,
            payment_method: None,
        };
        for _ in 0..2 {
            let err = create_expense(&store, huge()).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        let mut largest = huge();
        largest.amount = MAX_AMOUNT;
        create_expense(&store, largest.clone()).unwrap();
        create_expense(&store, largest).unwrap();

        let dashboard = get_dashboard(&store, &config);
        assert_eq!(dashboard.summary.expense_count, 2);
        assert_eq!(
            dashboard.summary.expenses.total,
            MAX_AMOUNT + MAX_AMOUNT
        );
    }

    #[test]
    fn test_empty_store() {
        let config = ConfigState {
            seed_mock_data: false,
            ..ConfigState::default()
        };
        let store = StoreState::from_config(&config);
        let dashboard = get_dashboard(&store, &config);

        assert_eq!(dashboard.summary.expenses.total, Money::zero());
        assert!(dashboard.summary.top_companies.is_empty());
        assert_eq!(dashboard.summary.status_percentages, vec![0.0, 0.0]);
        assert_eq!(dashboard.formatted.total_expenses, "$0.00");
    }
}
