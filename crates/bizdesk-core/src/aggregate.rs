//! # Aggregation Engine
//!
//! Reduces expense and invoice collections to the totals the dashboard
//! shows. Every function here is a pure reduction over borrowed slices.
//!
//! ## Dashboard Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  expenses ──┬──► sum_by_status(Paid)     ──► "Paid" card               │
//! │             ├──► sum_by_status(Pending)  ──► "Pending" card            │
//! │             ├──► per_company_breakdown   ──► stacked bar chart          │
//! │             └──► monthly_expense_totals  ──► trend line                 │
//! │                                                                         │
//! │  invoices ──┬──► invoice_totals          ──► invoiced / received /     │
//! │             │                                outstanding cards          │
//! │             └──► invoice_status_counts   ──► status badges              │
//! │                                                                         │
//! │  Empty input always gives zero totals, never an error.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are integer cents, so every sum is exact and independent of the
//! order records were added in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Company, Expense, ExpenseStatus, Invoice, InvoiceStatus};

// =============================================================================
// Expense Sums
// =============================================================================

/// Sum of `amount` over expenses with the given status.
///
/// ```rust
/// use bizdesk_core::aggregate::sum_by_status;
/// use bizdesk_core::{ExpenseStatus, Money};
///
/// assert_eq!(sum_by_status(&[], ExpenseStatus::Paid), Money::zero());
/// ```
pub fn sum_by_status(expenses: &[Expense], status: ExpenseStatus) -> Money {
    expenses
        .iter()
        .filter(|e| e.status == status)
        .map(|e| e.amount)
        .sum()
}

/// Paid / pending / total over a set of expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpenseTotals {
    pub paid: Money,
    pub pending: Money,
    pub total: Money,
}

pub fn expense_totals(expenses: &[Expense]) -> ExpenseTotals {
    let paid = sum_by_status(expenses, ExpenseStatus::Paid);
    let pending = sum_by_status(expenses, ExpenseStatus::Pending);
    ExpenseTotals {
        paid,
        pending,
        total: paid + pending,
    }
}

// =============================================================================
// Per-Company Breakdown
// =============================================================================

/// One bar of the per-company chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyBreakdown {
    pub company_id: String,
    pub name: String,
    pub paid: Money,
    pub pending: Money,
    pub total: Money,
}

/// Paid and pending expense totals for each company.
///
/// ## Rules
/// - Companies whose total is zero are left out entirely
/// - Sorted by `total`, largest first
/// - Equal totals keep the order of `companies` (stable sort)
/// - Expenses pointing at a company not in `companies` count for no one
pub fn per_company_breakdown(companies: &[Company], expenses: &[Expense]) -> Vec<CompanyBreakdown> {
    let mut sums: HashMap<&str, (Money, Money)> = HashMap::new();
    for expense in expenses {
        let entry = sums.entry(expense.company_id.as_str()).or_default();
        match expense.status {
            ExpenseStatus::Paid => entry.0 += expense.amount,
            ExpenseStatus::Pending => entry.1 += expense.amount,
        }
    }

    let mut breakdown: Vec<CompanyBreakdown> = companies
        .iter()
        .filter_map(|company| {
            let (paid, pending) = sums.get(company.id.as_str()).copied().unwrap_or_default();
            let total = paid + pending;
            if total.is_zero() {
                return None;
            }
            Some(CompanyBreakdown {
                company_id: company.id.clone(),
                name: company.name.clone(),
                paid,
                pending,
                total,
            })
        })
        .collect();

    // slice::sort_by is stable
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Invoiced vs received vs outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub total_invoiced: Money,
    pub total_paid: Money,
    /// `total_invoiced - total_paid`. Not clamped: overpayments push it
    /// below zero.
    pub total_outstanding: Money,
}

pub fn invoice_totals(invoices: &[Invoice]) -> InvoiceTotals {
    let total_invoiced: Money = invoices.iter().map(Invoice::total_amount).sum();
    let total_paid: Money = invoices.iter().map(|i| i.paid_amount).sum();
    InvoiceTotals {
        total_invoiced,
        total_paid,
        total_outstanding: total_invoiced - total_paid,
    }
}

/// Number of invoices in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceStatusCounts {
    pub paid: usize,
    pub unpaid: usize,
    pub partially_paid: usize,
}

pub fn invoice_status_counts(invoices: &[Invoice]) -> InvoiceStatusCounts {
    invoices
        .iter()
        .fold(InvoiceStatusCounts::default(), |mut counts, invoice| {
            match invoice.status {
                InvoiceStatus::Paid => counts.paid += 1,
                InvoiceStatus::Unpaid => counts.unpaid += 1,
                InvoiceStatus::PartiallyPaid => counts.partially_paid += 1,
            }
            counts
        })
}

// =============================================================================
// Monthly Trend
// =============================================================================

/// Expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM`
    pub label: String,
    pub paid: Money,
    pub pending: Money,
    pub total: Money,
}

/// Expense totals grouped by calendar month, oldest first.
///
/// Months without expenses are omitted.
pub fn monthly_expense_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();
    for expense in expenses {
        let key = month_key(expense.date);
        let entry = months.entry(key).or_default();
        match expense.status {
            ExpenseStatus::Paid => entry.0 += expense.amount,
            ExpenseStatus::Pending => entry.1 += expense.amount,
        }
    }

    months
        .into_iter()
        .map(|((year, month), (paid, pending))| MonthlyTotal {
            year,
            month,
            label: format!("{:04}-{:02}", year, month),
            paid,
            pending,
            total: paid + pending,
        })
        .collect()
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

// =============================================================================
// Unit Tests
// =============================================================================
