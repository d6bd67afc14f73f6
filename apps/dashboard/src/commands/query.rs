//! # List Queries
//!
//! The filter bar of the expense and invoice lists, as the UI sends it.
//!
//! ```json
//! { "company": "company-…", "status": "pending", "dateFrom": "2024-03-01",
//!   "dateTo": null, "searchQuery": "" }
//! ```

use std::str::FromStr;

use bizdesk_core::validation::validate_search_query;
use bizdesk_core::{FilterSpec, StatusFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Company filter value meaning "every company".
pub const ALL_COMPANIES: &str = "all";

/// Filter bar state. Every field is optional; an empty query lists
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    /// Company id. `""` and `"all"` mean every company.
    pub company: Option<String>,
    /// Status wire name or `"all"`.
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search_query: Option<String>,
}

impl ListQuery {
    /// Converts to a core filter spec.
    ///
    /// Status strings that name no status are kept as
    /// [`StatusFilter::Unrecognized`], which matches nothing.
    pub fn to_filter<S: FromStr>(&self) -> Result<FilterSpec<S>, ApiError> {
        if let Some(query) = &self.search_query {
            validate_search_query(query)?;
        }

        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_COMPANIES)
            .map(str::to_string);

        let status = match self.status.as_deref() {
            None | Some("") => StatusFilter::All,
            Some(s) => s.parse().unwrap_or_default(),
        };

        Ok(FilterSpec {
            company,
            status,
            date_from: self.date_from,
            date_to: self.date_to,
            search_query: self.search_query.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdesk_core::{ExpenseStatus, InvoiceStatus};

    #[test]
    fn test_empty_query_is_unfiltered() {
        let spec: FilterSpec<ExpenseStatus> = ListQuery::default().to_filter().unwrap();
        assert!(spec.is_unfiltered());

        let query = ListQuery {
            company: Some("all".to_string()),
            status: Some("all".to_string()),
            search_query: Some(String::new()),
            ..ListQuery::default()
        };
        let spec: FilterSpec<ExpenseStatus> = query.to_filter().unwrap();
        assert!(spec.is_unfiltered());
    }

    #[test]
    fn test_status_parsing_per_kind() {
        let query = ListQuery {
            status: Some("partially_paid".to_string()),
            ..ListQuery::default()
        };
        let invoices: FilterSpec<InvoiceStatus> = query.to_filter().unwrap();
        assert_eq!(invoices.status, StatusFilter::Is(InvoiceStatus::PartiallyPaid));

        let expenses: FilterSpec<ExpenseStatus> = query.to_filter().unwrap();
        assert_eq!(
            expenses.status,
            StatusFilter::Unrecognized("partially_paid".to_string())
        );
    }

    #[test]
    fn test_deserializes_camel_case() {
        let query: ListQuery = serde_json::from_str(
            r#"{ "company": "company-1", "dateFrom": "2024-03-01", "searchQuery": "rent" }"#,
        )
        .unwrap();
        assert_eq!(query.company.as_deref(), Some("company-1"));
        assert_eq!(query.date_from, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(query.search_query.as_deref(), Some("rent"));
        assert_eq!(query.status, None);
    }

    #[test]
    fn test_long_search_is_rejected() {
        let query = ListQuery {
            search_query: Some("x".repeat(101)),
            ..ListQuery::default()
        };
        let result: Result<FilterSpec<ExpenseStatus>, ApiError> = query.to_filter();
        assert!(result.is_err());
    }
}
