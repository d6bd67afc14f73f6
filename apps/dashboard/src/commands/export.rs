//! # Export Commands
//!
//! CSV of the list the user is looking at: same filter, same order.

use bizdesk_core::export::{expenses_to_csv, invoices_to_csv};
use bizdesk_core::{filter_records, Expense, Invoice};
use tracing::info;

use super::query::ListQuery;
use crate::error::ApiError;
use crate::state::StoreState;

pub fn export_expenses_csv(store: &StoreState, query: &ListQuery) -> Result<String, ApiError> {
    let spec = query.to_filter()?;
    store.with_store(|s| {
        let directory = s.directory();
        let rows: Vec<Expense> = filter_records(s.expenses(), &spec, &directory);
        info!(rows = rows.len(), "Exporting expenses");
        expenses_to_csv(&rows, &directory).map_err(ApiError::from)
    })
}

pub fn export_invoices_csv(store: &StoreState, query: &ListQuery) -> Result<String, ApiError> {
    let spec = query.to_filter()?;
    store.with_store(|s| {
        let directory = s.directory();
        let rows: Vec<Invoice> = filter_records(s.invoices(), &spec, &directory);
        info!(rows = rows.len(), "Exporting invoices");
        invoices_to_csv(&rows, &directory).map_err(ApiError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    fn seeded() -> StoreState {
        StoreState::from_config(&ConfigState::default())
    }

    #[test]
    fn test_export_matches_filtered_list() {
        let store = seeded();
        let query = ListQuery {
            status: Some("pending".to_string()),
            ..ListQuery::default()
        };

        let csv = export_expenses_csv(&store, &query).unwrap();
        let listed = crate::commands::expense::list_expenses(&store, &query).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Company,Description,Category,Project,Amount,Status");
        assert_eq!(lines.len(), listed.len() + 1);
        for (line, row) in lines[1..].iter().zip(&listed) {
            assert!(line.contains(&row.description));
            assert!(line.ends_with(",pending"));
        }
    }

    #[test]
    fn test_invoice_export_has_derived_totals() {
        let store = seeded();
        let query = ListQuery {
            search_query: Some("INV-202403-001".to_string()),
            ..ListQuery::default()
        };
        let csv = export_invoices_csv(&store, &query).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "INV-202403-001,Acme Corporation,2024-03-01,2024-03-31,4750.00,0.00,unpaid"
        );
    }
}
