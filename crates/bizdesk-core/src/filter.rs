//! # Filter Engine
//!
//! Reduces an expense or invoice collection to the subset a list view shows.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Record Decision                                  │
//! │                                                                         │
//! │  search_query non-empty?                                               │
//! │       │                                                                 │
//! │       ├── YES ──► keep iff query is a substring of a searchable field  │
//! │       │           (company / status / date filters are NOT consulted)  │
//! │       │                                                                 │
//! │       └── NO ───► company == record.company_id     (if set)            │
//! │                   status  == record.status         (unless "all")      │
//! │                   date_from <= record.date          (if set)            │
//! │                   record.date <= date_to            (if set)            │
//! │                                                                         │
//! │  Kept records stay in their original relative order.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The search short-circuit is the list views' established behavior: typing
//! in the search box replaces the other filters rather than narrowing them.
//!
//! ## Usage
//! ```rust
//! use bizdesk_core::filter::{filter_records, FilterSpec, StatusFilter};
//! use bizdesk_core::{CompanyDirectory, Expense, ExpenseStatus};
//!
//! let expenses: Vec<Expense> = Vec::new();
//! let directory = CompanyDirectory::default();
//!
//! let spec = FilterSpec::<ExpenseStatus> {
//!     status: "pending".parse().unwrap(),
//!     ..FilterSpec::default()
//! };
//! assert_eq!(spec.status, StatusFilter::Is(ExpenseStatus::Pending));
//! assert!(filter_records(&expenses, &spec, &directory).is_empty());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::directory::CompanyDirectory;
use crate::types::{Expense, ExpenseStatus, Invoice, InvoiceStatus};

/// Sentinel status value meaning "no status filter".
pub const ALL_STATUSES: &str = "all";

// =============================================================================
// Status Filter
// =============================================================================

/// The status part of a filter.
///
/// Parsed from the string a status dropdown sends. Strings that are not a
/// valid status for the record kind become `Unrecognized` and match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter<S> {
    /// The `"all"` sentinel.
    All,
    Is(S),
    Unrecognized(String),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn accepts(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Is(wanted) => wanted == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }
}

impl<S: FromStr> FromStr for StatusFilter<S> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_STATUSES {
            return Ok(StatusFilter::All);
        }
        Ok(match s.parse::<S>() {
            Ok(status) => StatusFilter::Is(status),
            Err(_) => StatusFilter::Unrecognized(s.to_string()),
        })
    }
}

// =============================================================================
// Filter Specification
// =============================================================================

/// Which records a list view keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec<S> {
    /// Keep only records of this company id. `None` keeps every company.
    pub company: Option<String>,
    pub status: StatusFilter<S>,
    /// Inclusive lower bound on the record date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring search. When non-empty it is the only
    /// predicate applied.
    pub search_query: Option<String>,
}

impl<S> Default for FilterSpec<S> {
    fn default() -> Self {
        FilterSpec {
            company: None,
            status: StatusFilter::All,
            date_from: None,
            date_to: None,
            search_query: None,
        }
    }
}

impl<S: PartialEq> FilterSpec<S> {
    /// The search needle, lowercased, if a non-empty query is set.
    fn needle(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// True when this spec would keep every record.
    pub fn is_unfiltered(&self) -> bool {
        self.company.is_none()
            && matches!(self.status, StatusFilter::All)
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.needle().is_none()
    }

    /// Decides whether a single record is kept.
    pub fn matches<R>(&self, record: &R, directory: &CompanyDirectory<'_>) -> bool
    where
        R: LedgerEntry<Status = S>,
    {
        match self.needle() {
            Some(needle) => matches_needle(record, &needle, directory),
            None => self.matches_fields(record),
        }
    }

    fn matches_fields<R>(&self, record: &R) -> bool
    where
        R: LedgerEntry<Status = S>,
    {
        if let Some(company) = &self.company {
            if record.company_id() != company.as_str() {
                return false;
            }
        }

        if !self.status.accepts(&record.status()) {
            return false;
        }

        let date = record.date();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }

        true
    }
}

fn matches_needle<R: LedgerEntry>(
    record: &R,
    needle: &str,
    directory: &CompanyDirectory<'_>,
) -> bool {
    let company_name = directory.name_of(record.company_id());
    record
        .search_fields(company_name)
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

// =============================================================================
// Filterable Records
// =============================================================================

/// A record the filter engine can work on.
pub trait LedgerEntry {
    type Status: PartialEq;

    fn company_id(&self) -> &str;
    fn date(&self) -> NaiveDate;
    fn status(&self) -> Self::Status;

    /// Text the search box looks at, given the resolved company name.
    fn search_fields<'a>(&'a self, company_name: &'a str) -> Vec<&'a str>;
}

impl LedgerEntry for Expense {
    type Status = ExpenseStatus;

    fn company_id(&self) -> &str {
        &self.company_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn status(&self) -> ExpenseStatus {
        self.status
    }

    fn search_fields<'a>(&'a self, company_name: &'a str) -> Vec<&'a str> {
        let mut fields = vec![
            self.description.as_str(),
            company_name,
            self.category.as_str(),
        ];
        if let Some(project) = &self.project {
            fields.push(project);
        }
        fields
    }
}

impl LedgerEntry for Invoice {
    type Status = InvoiceStatus;

    fn company_id(&self) -> &str {
        &self.company_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn search_fields<'a>(&'a self, company_name: &'a str) -> Vec<&'a str> {
        vec![self.invoice_number.as_str(), company_name]
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Returns the records `spec` keeps, in their original order.
///
/// Never mutates `records`; the result is a fresh vector of clones.
pub fn filter_records<R>(
    records: &[R],
    spec: &FilterSpec<R::Status>,
    directory: &CompanyDirectory<'_>,
) -> Vec<R>
where
    R: LedgerEntry + Clone,
{
    records
        .iter()
        .filter(|record| spec.matches(*record, directory))
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Company, CompanyDraft, InvoiceItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn companies() -> Vec<Company> {
        vec![
            CompanyDraft::named("Acme Corporation").into_company("c-acme".to_string()),
            CompanyDraft::named("Globex Inc").into_company("c-globex".to_string()),
        ]
    }

    fn expense(id: &str, company: &str, day: u32, status: ExpenseStatus, desc: &str) -> Expense {
        Expense {
            id: id.to_string(),
            company_id: company.to_string(),
            amount: Money::from_major(100),
            date: date(2024, 3, day),
            description: desc.to_string(),
            category: "Marketing".to_string(),
            project: None,
            status,
            payment_date: None,
            payment_method: None,
        }
    }

    fn expenses() -> Vec<Expense> {
        vec![
            expense("e1", "c-acme", 1, ExpenseStatus::Paid, "Office rent"),
            expense("e2", "c-globex", 5, ExpenseStatus::Pending, "Branding materials"),
            expense("e3", "c-acme", 10, ExpenseStatus::Pending, "Team lunch"),
            expense("e4", "c-gone", 15, ExpenseStatus::Paid, "Cloud hosting"),
        ]
    }

    fn ids<R: LedgerEntry>(records: &[R], id: impl Fn(&R) -> &str) -> Vec<String> {
        records.iter().map(|r| id(r).to_string()).collect()
    }

    fn expense_ids(records: &[Expense]) -> Vec<String> {
        ids(records, |e| e.id.as_str())
    }

    #[test]
    fn test_default_spec_keeps_everything_in_order() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec::<ExpenseStatus>::default();
        assert!(spec.is_unfiltered());

        let kept = filter_records(&expenses(), &spec, &directory);
        assert_eq!(expense_ids(&kept), vec!["e1", "e2", "e3", "e4"]);
    }

    #[test]
    fn test_company_filter() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec {
            company: Some("c-acme".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_records(&expenses(), &spec, &directory);
        assert_eq!(expense_ids(&kept), vec!["e1", "e3"]);
    }

    #[test]
    fn test_status_filter_and_all_sentinel() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);

        let pending = FilterSpec {
            status: "pending".parse().unwrap(),
            ..FilterSpec::default()
        };
        let kept = filter_records(&expenses(), &pending, &directory);
        assert_eq!(expense_ids(&kept), vec!["e2", "e3"]);

        let all = FilterSpec::<ExpenseStatus> {
            status: "all".parse().unwrap(),
            ..FilterSpec::default()
        };
        assert_eq!(filter_records(&expenses(), &all, &directory).len(), 4);
    }

    #[test]
    fn test_unrecognized_status_matches_nothing() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec::<ExpenseStatus> {
            status: "overdue".parse().unwrap(),
            ..FilterSpec::default()
        };
        assert_eq!(spec.status, StatusFilter::Unrecognized("overdue".to_string()));
        assert!(filter_records(&expenses(), &spec, &directory).is_empty());
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec {
            date_from: Some(date(2024, 3, 5)),
            date_to: Some(date(2024, 3, 10)),
            ..FilterSpec::default()
        };

        let kept = filter_records(&expenses(), &spec, &directory);
        assert_eq!(expense_ids(&kept), vec!["e2", "e3"]);

        let open_ended = FilterSpec {
            date_from: Some(date(2024, 3, 11)),
            ..FilterSpec::default()
        };
        let kept = filter_records(&expenses(), &open_ended, &directory);
        assert_eq!(expense_ids(&kept), vec!["e4"]);
    }

    #[test]
    fn test_search_bypasses_other_filters() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec {
            company: Some("c-acme".to_string()),
            status: StatusFilter::Is(ExpenseStatus::Paid),
            date_to: Some(date(2024, 3, 1)),
            search_query: Some("branding".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_records(&expenses(), &spec, &directory);
        assert_eq!(expense_ids(&kept), vec!["e2"]);
    }

    #[test]
    fn test_search_matches_company_category_and_project() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let mut records = expenses();
        records[2].project = Some("Website Relaunch".to_string());

        let by_company = FilterSpec::<ExpenseStatus> {
            search_query: Some("GLOBEX".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(
            expense_ids(&filter_records(&records, &by_company, &directory)),
            vec!["e2"]
        );

        let by_category = FilterSpec::<ExpenseStatus> {
            search_query: Some("marketing".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(filter_records(&records, &by_category, &directory).len(), 4);

        let by_project = FilterSpec::<ExpenseStatus> {
            search_query: Some("relaunch".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(
            expense_ids(&filter_records(&records, &by_project, &directory)),
            vec!["e3"]
        );
    }

    #[test]
    fn test_search_finds_dangling_company_as_unknown() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec::<ExpenseStatus> {
            search_query: Some("unknown company".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(
            expense_ids(&filter_records(&expenses(), &spec, &directory)),
            vec!["e4"]
        );
    }

    #[test]
    fn test_empty_search_is_ignored() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec {
            status: StatusFilter::Is(ExpenseStatus::Paid),
            search_query: Some(String::new()),
            ..FilterSpec::default()
        };
        assert_eq!(
            expense_ids(&filter_records(&expenses(), &spec, &directory)),
            vec!["e1", "e4"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let spec = FilterSpec {
            company: Some("c-acme".to_string()),
            status: StatusFilter::Is(ExpenseStatus::Pending),
            ..FilterSpec::default()
        };

        let once = filter_records(&expenses(), &spec, &directory);
        let twice = filter_records(&once, &spec, &directory);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invoice_search_on_number_and_company() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let invoice = |id: &str, number: &str, company: &str| Invoice {
            id: id.to_string(),
            company_id: company.to_string(),
            invoice_number: number.to_string(),
            date: date(2024, 3, 1),
            due_date: date(2024, 3, 31),
            status: InvoiceStatus::Unpaid,
            items: vec![InvoiceItem::new("Work", 1, Money::from_major(10))],
            tax: Money::zero(),
            discount: Money::zero(),
            notes: Some("acme mentioned in notes only".to_string()),
            paid_amount: Money::zero(),
        };
        let invoices = vec![
            invoice("i1", "INV-202403-001", "c-acme"),
            invoice("i2", "INV-202403-002", "c-globex"),
        ];

        let by_number = FilterSpec::<InvoiceStatus> {
            search_query: Some("inv-202403-002".to_string()),
            ..FilterSpec::default()
        };
        let kept = filter_records(&invoices, &by_number, &directory);
        assert_eq!(ids(&kept, |i| i.id.as_str()), vec!["i2"]);

        let by_company = FilterSpec::<InvoiceStatus> {
            search_query: Some("acme".to_string()),
            ..FilterSpec::default()
        };
        let kept = filter_records(&invoices, &by_company, &directory);
        assert_eq!(ids(&kept, |i| i.id.as_str()), vec!["i1"]);

        let by_status = FilterSpec::<InvoiceStatus> {
            status: "partially_paid".parse().unwrap(),
            ..FilterSpec::default()
        };
        assert!(filter_records(&invoices, &by_status, &directory).is_empty());
    }
}
