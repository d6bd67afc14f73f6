//! # Derived Views
//!
//! Shapes aggregation results for the dashboard charts. Nothing here changes
//! a number; it only selects, orders and labels.
//!
//! ## Dashboard Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐      │
//! │  │ Expenses │ │   Paid   │ │ Pending  │ │ Invoiced │ │Outstand. │      │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────────┘      │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │ Top companies (bar chart)    │  │ Paid vs Pending (pie chart)  │    │
//! │  │ top_companies_by_total(n)    │  │ status_split + percentages   │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::aggregate::{
    expense_totals, invoice_status_counts, invoice_totals, monthly_expense_totals,
    per_company_breakdown, CompanyBreakdown, ExpenseTotals, InvoiceStatusCounts, InvoiceTotals,
    MonthlyTotal,
};
use crate::money::Money;
use crate::types::{Company, Expense, Invoice};

pub const PAID_LABEL: &str = "Paid";
pub const PENDING_LABEL: &str = "Pending";

// =============================================================================
// Top Companies
// =============================================================================

/// The first `n` entries of an already sorted breakdown.
///
/// Returns every entry when there are fewer than `n`.
pub fn top_companies_by_total(breakdown: &[CompanyBreakdown], n: usize) -> Vec<CompanyBreakdown> {
    breakdown.iter().take(n).cloned().collect()
}

// =============================================================================
// Status Split
// =============================================================================

/// One wedge of the paid/pending chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusSlice {
    pub label: String,
    pub value: Money,
}

impl StatusSlice {
    /// Share of this slice in `slices`, in percent (0-100).
    ///
    /// Zero when all slices sum to zero.
    ///
    /// ```rust
    /// use bizdesk_core::view::status_split;
    /// use bizdesk_core::Money;
    ///
    /// let split = status_split(Money::from_major(75), Money::from_major(25));
    /// assert_eq!(split[0].percentage_of(&split), 75.0);
    ///
    /// let empty = status_split(Money::zero(), Money::zero());
    /// assert_eq!(empty[1].percentage_of(&empty), 0.0);
    /// ```
    pub fn percentage_of(&self, slices: &[StatusSlice]) -> f64 {
        let whole: Money = slices.iter().map(|s| s.value).sum();
        if whole.is_zero() {
            return 0.0;
        }
        self.value.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// `[Paid, Pending]`, always in that order.
pub fn status_split(total_paid: Money, total_pending: Money) -> Vec<StatusSlice> {
    vec![
        StatusSlice {
            label: PAID_LABEL.to_string(),
            value: total_paid,
        },
        StatusSlice {
            label: PENDING_LABEL.to_string(),
            value: total_pending,
        },
    ]
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Everything the dashboard page renders, computed in one pass over the
/// three collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub company_count: usize,
    pub expense_count: usize,
    pub invoice_count: usize,
    pub expenses: ExpenseTotals,
    pub invoices: InvoiceTotals,
    pub invoice_status: InvoiceStatusCounts,
    pub top_companies: Vec<CompanyBreakdown>,
    pub status_split: Vec<StatusSlice>,
    /// Percent share of each `status_split` entry, same order.
    pub status_percentages: Vec<f64>,
    pub monthly: Vec<MonthlyTotal>,
}

impl DashboardSummary {
    pub fn build(
        companies: &[Company],
        expenses: &[Expense],
        invoices: &[Invoice],
        top_n: usize,
    ) -> Self {
        let expense_sums = expense_totals(expenses);
        let breakdown = per_company_breakdown(companies, expenses);
        let split = status_split(expense_sums.paid, expense_sums.pending);
        let status_percentages = split.iter().map(|s| s.percentage_of(&split)).collect();

        DashboardSummary {
            company_count: companies.len(),
            expense_count: expenses.len(),
            invoice_count: invoices.len(),
            expenses: expense_sums,
            invoices: invoice_totals(invoices),
            invoice_status: invoice_status_counts(invoices),
            top_companies: top_companies_by_total(&breakdown, top_n),
            status_split: split,
            status_percentages,
            monthly: monthly_expense_totals(expenses),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
