//! # Domain Types
//!
//! The three record kinds kept by Bizdesk and their supporting enums.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Company      │   │     Expense     │   │     Invoice     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  company_id     │   │  company_id ──► │       │
//! │  │  name           │   │  amount         │   │  invoice_number │       │
//! │  │  contact_*      │   │  status         │   │  items[]        │       │
//! │  └─────────────────┘   └─────────────────┘   │  tax, discount  │       │
//! │                                              │  paid_amount    │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  company_id is a soft reference: deleting a company leaves it dangling │
//! │  and name lookups fall back to "Unknown Company".                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Drafts
//! Each record has a `*Draft` twin without an `id`. The record store turns a
//! draft into a record by assigning a fresh `"<prefix>-<uuid>"` id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Record Kind
// =============================================================================

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Company,
    Expense,
    Invoice,
}

impl RecordKind {
    /// Prefix used for store-assigned ids, e.g. `expense-3f2c...`.
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            RecordKind::Company => "company",
            RecordKind::Expense => "expense",
            RecordKind::Invoice => "invoice",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Company => write!(f, "Company"),
            RecordKind::Expense => write!(f, "Expense"),
            RecordKind::Invoice => write!(f, "Invoice"),
        }
    }
}

// =============================================================================
// Company
// =============================================================================

/// A client or vendor that expenses and invoices refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

/// Company data before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyDraft {
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl CompanyDraft {
    /// A draft with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        CompanyDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn into_company(self, id: String) -> Company {
        Company {
            id,
            name: self.name,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            address: self.address,
        }
    }
}

// =============================================================================
// Expense Status
// =============================================================================

/// Whether an expense has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Paid,
    Pending,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 2] = [ExpenseStatus::Paid, ExpenseStatus::Pending];

    /// Wire name, as used in filters and CSV exports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Paid => "paid",
            ExpenseStatus::Pending => "pending",
        }
    }
}

impl Default for ExpenseStatus {
    fn default() -> Self {
        ExpenseStatus::Pending
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(ExpenseStatus::Paid),
            "pending" => Ok(ExpenseStatus::Pending),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown expense status '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a paid expense was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    Cash,
    Check,
    Other,
}

// =============================================================================
// Expense
// =============================================================================

/// Money spent on behalf of a company.
///
/// `payment_date` and `payment_method` are only meaningful when the status
/// is [`ExpenseStatus::Paid`]; see [`crate::validation::validate_expense`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Expense {
    pub id: String,
    pub company_id: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub project: Option<String>,
    pub status: ExpenseStatus,
    #[ts(as = "Option<String>")]
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
}

/// Expense data before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpenseDraft {
    pub company_id: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub project: Option<String>,
    pub status: ExpenseStatus,
    #[ts(as = "Option<String>")]
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
}

impl ExpenseDraft {
    pub fn into_expense(self, id: String) -> Expense {
        Expense {
            id,
            company_id: self.company_id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category: self.category,
            project: self.project,
            status: self.status,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
        }
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// Settlement state of an invoice. Set by the user; not derived from
/// `paid_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    PartiallyPaid,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Unpaid,
        InvoiceStatus::PartiallyPaid,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::PartiallyPaid => "partially_paid",
        }
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Unpaid
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(InvoiceStatus::Paid),
            "unpaid" => Ok(InvoiceStatus::Unpaid),
            "partially_paid" => Ok(InvoiceStatus::PartiallyPaid),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown invoice status '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A line on an invoice.
///
/// The line amount is never stored: [`InvoiceItem::amount`] is always
/// `quantity × unit_price` of the item as it is now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        InvoiceItem {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Line amount: quantity × unit price.
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_price.multiply_quantity(i64::from(self.quantity))
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A bill sent to a company.
///
/// ## Derived Amounts
/// ```text
/// subtotal      = Σ item.amount()
/// total_amount  = subtotal + tax − discount
/// balance_due   = total_amount − paid_amount     (may go negative)
/// ```
/// None of these are stored, so they cannot drift from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub id: String,
    pub company_id: String,
    pub invoice_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
    pub tax: Money,
    pub discount: Money,
    pub notes: Option<String>,
    pub paid_amount: Money,
}

impl Invoice {
    /// Sum of line amounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(InvoiceItem::amount).sum()
    }

    /// Subtotal plus tax minus discount.
    pub fn total_amount(&self) -> Money {
        self.subtotal() + self.tax - self.discount
    }

    /// What is still owed. Negative when the invoice was overpaid.
    pub fn balance_due(&self) -> Money {
        self.total_amount() - self.paid_amount
    }
}

/// Invoice data before the store assigns an id.
///
/// `invoice_number` may be left empty; the store then generates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceDraft {
    pub company_id: String,
    pub invoice_number: Option<String>,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
    pub tax: Money,
    pub discount: Money,
    pub notes: Option<String>,
    pub paid_amount: Money,
}

impl InvoiceDraft {
    /// The caller-supplied number, if it is non-blank.
    pub fn supplied_number(&self) -> Option<&str> {
        self.invoice_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn into_invoice(self, id: String, invoice_number: String) -> Invoice {
        Invoice {
            id,
            company_id: self.company_id,
            invoice_number,
            date: self.date,
            due_date: self.due_date,
            status: self.status,
            items: self.items,
            tax: self.tax,
            discount: self.discount,
            notes: self.notes,
            paid_amount: self.paid_amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice(items: Vec<InvoiceItem>, tax: i64, discount: i64, paid: i64) -> Invoice {
        Invoice {
            id: "invoice-1".to_string(),
            company_id: "company-1".to_string(),
            invoice_number: "INV-202403-042".to_string(),
            date: date(2024, 3, 1),
            due_date: date(2024, 3, 31),
            status: InvoiceStatus::Unpaid,
            items,
            tax: Money::from_major(tax),
            discount: Money::from_major(discount),
            notes: None,
            paid_amount: Money::from_major(paid),
        }
    }

    #[test]
    fn test_item_amount_follows_quantity_and_price() {
        let mut item = InvoiceItem::new("Consulting", 3, Money::from_major(150));
        assert_eq!(item.amount(), Money::from_major(450));

        item.quantity = 5;
        assert_eq!(item.amount(), Money::from_major(750));

        item.unit_price = Money::from_major(100);
        assert_eq!(item.amount(), Money::from_major(500));
    }

    #[test]
    fn test_invoice_total_is_subtotal_plus_tax_minus_discount() {
        let inv = invoice(
            vec![
                InvoiceItem::new("Design", 10, Money::from_major(400)),
                InvoiceItem::new("Hosting", 1, Money::from_major(500)),
            ],
            350,
            100,
            0,
        );
        assert_eq!(inv.subtotal(), Money::from_major(4500));
        assert_eq!(inv.total_amount(), Money::from_major(4750));
        assert_eq!(inv.balance_due(), Money::from_major(4750));
    }

    #[test]
    fn test_overpaid_invoice_has_negative_balance() {
        let inv = invoice(vec![InvoiceItem::new("Audit", 1, Money::from_major(100))], 0, 0, 120);
        assert_eq!(inv.balance_due(), Money::from_major(-20));
    }

    #[test]
    fn test_status_round_trip_through_strings() {
        for status in ExpenseStatus::ALL {
            assert_eq!(status.as_str().parse::<ExpenseStatus>().unwrap(), status);
        }
        for status in InvoiceStatus::ALL {
            assert_eq!(status.as_str().parse::<InvoiceStatus>().unwrap(), status);
        }
        assert!("all".parse::<ExpenseStatus>().is_err());
        assert!("overdue".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_wire_name() {
        let json = serde_json::to_string(&InvoiceStatus::PartiallyPaid).unwrap();
        assert_eq!(json, "\"partially_paid\"");
    }

    #[test]
    fn test_supplied_number_ignores_blank() {
        let mut draft = InvoiceDraft {
            company_id: "company-1".to_string(),
            invoice_number: Some("   ".to_string()),
            date: date(2024, 3, 1),
            due_date: date(2024, 3, 31),
            status: InvoiceStatus::Unpaid,
            items: Vec::new(),
            tax: Money::zero(),
            discount: Money::zero(),
            notes: None,
            paid_amount: Money::zero(),
        };
        assert_eq!(draft.supplied_number(), None);

        draft.invoice_number = Some(" INV-202403-007 ".to_string());
        assert_eq!(draft.supplied_number(), Some("INV-202403-007"));
    }

    #[test]
    fn test_record_kind_prefixes() {
        assert_eq!(RecordKind::Company.id_prefix(), "company");
        assert_eq!(RecordKind::Expense.id_prefix(), "expense");
        assert_eq!(RecordKind::Invoice.id_prefix(), "invoice");
        assert_eq!(RecordKind::Invoice.to_string(), "Invoice");
    }
}
