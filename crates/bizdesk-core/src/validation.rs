//! # Validation Module
//!
//! Input rules for company, expense and invoice forms.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (TypeScript)                                            │
//! │  └── Required fields, numeric inputs                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: App command (Rust)                                           │
//! │  └── THIS MODULE: record rules, checked before the store is touched    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record store                                                 │
//! │  └── Assumes well-formed drafts; only assigns ids                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bizdesk_core::validation::{validate_company_name, validate_quantity};
//!
//! assert!(validate_company_name("Acme Corporation").is_ok());
//! assert!(validate_company_name("   ").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CompanyDraft, ExpenseDraft, ExpenseStatus, InvoiceDraft, InvoiceItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_SEARCH_LEN: usize = 100;

/// Largest accepted money value: 10 billion in currency units.
///
/// Keeps every line amount, invoice subtotal and dashboard sum far inside
/// `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000);

/// Largest accepted quantity on an invoice line.
pub const MAX_QUANTITY: u32 = 1_000_000;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Company name: required, at most 200 characters.
pub fn validate_company_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Loose email shape check: `local@domain.tld`.
///
/// ```rust
/// use bizdesk_core::validation::validate_email;
///
/// assert!(validate_email("billing@acme.example").is_ok());
/// assert!(validate_email("billing@acme").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "contact_email".to_string(),
        reason: reason.to_string(),
    };

    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() {
        return Err(invalid("missing name before '@'"));
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(invalid("domain must look like example.com")),
    }
}

/// Search box input: at most 100 characters. Returns the query unchanged.
pub fn validate_search_query(query: &str) -> ValidationResult<&str> {
    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search_query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }
    Ok(query)
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn too_large(field: &str, max: impl ToString) -> ValidationError {
    ValidationError::TooLarge {
        field: field.to_string(),
        max: max.to_string(),
    }
}

/// Money fields (amount, price, tax, ...): from zero up to [`MAX_AMOUNT`].
///
/// ```rust
/// use bizdesk_core::validation::{validate_amount, MAX_AMOUNT};
/// use bizdesk_core::Money;
///
/// assert!(validate_amount("amount", MAX_AMOUNT).is_ok());
/// assert!(validate_amount("amount", Money::from_cents(-1)).is_err());
/// assert!(validate_amount("amount", Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_amount(field: &str, value: Money) -> ValidationResult<()> {
    if value.is_negative() {
        return Err(ValidationError::negative(field));
    }
    if value > MAX_AMOUNT {
        return Err(too_large(field, MAX_AMOUNT));
    }
    Ok(())
}

/// Invoice line quantity: 1 to [`MAX_QUANTITY`].
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: 1,
        });
    }
    if quantity > MAX_QUANTITY {
        return Err(too_large("quantity", MAX_QUANTITY));
    }
    Ok(())
}

/// One invoice line. Returns the line amount, itself at most
/// [`MAX_AMOUNT`].
pub fn validate_invoice_item(item: &InvoiceItem) -> ValidationResult<Money> {
    validate_required("item description", &item.description)?;
    validate_quantity(item.quantity)?;
    validate_amount("unit_price", item.unit_price)?;

    let amount = item
        .unit_price
        .checked_multiply_quantity(i64::from(item.quantity))
        .ok_or_else(|| too_large("item amount", MAX_AMOUNT))?;
    validate_amount("item amount", amount)?;
    Ok(amount)
}

// =============================================================================
// Date Validators
// =============================================================================

/// `later` must not fall before `earlier`.
pub fn validate_date_order(
    later_field: &str,
    later: NaiveDate,
    earlier_field: &str,
    earlier: NaiveDate,
) -> ValidationResult<()> {
    if later < earlier {
        return Err(ValidationError::DateOrder {
            field: later_field.to_string(),
            other: earlier_field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

pub fn validate_company(draft: &CompanyDraft) -> ValidationResult<()> {
    validate_company_name(&draft.name)?;
    if let Some(email) = draft.contact_email.as_deref().filter(|e| !e.trim().is_empty()) {
        validate_email(email)?;
    }
    Ok(())
}

/// Expense form rules.
///
/// ## Rules
/// - company, description and category are required
/// - amount between zero and [`MAX_AMOUNT`]
/// - payment date / method only on paid expenses
/// - payment date not before the expense date
pub fn validate_expense(draft: &ExpenseDraft) -> ValidationResult<()> {
    validate_required("company_id", &draft.company_id)?;
    validate_required("description", &draft.description)?;
    validate_required("category", &draft.category)?;
    validate_amount("amount", draft.amount)?;

    if draft.status != ExpenseStatus::Paid {
        if draft.payment_date.is_some() {
            return Err(ValidationError::NotAllowed {
                field: "payment_date".to_string(),
                condition: "status is paid".to_string(),
            });
        }
        if draft.payment_method.is_some() {
            return Err(ValidationError::NotAllowed {
                field: "payment_method".to_string(),
                condition: "status is paid".to_string(),
            });
        }
    }

    if let Some(paid_on) = draft.payment_date {
        validate_date_order("payment_date", paid_on, "date", draft.date)?;
    }

    Ok(())
}

/// Invoice form rules.
///
/// ## Rules
/// - company is required, at least one line item
/// - every item: description, quantity 1..=MAX_QUANTITY, unit price and
///   line amount 0..=MAX_AMOUNT
/// - subtotal, tax, discount, paid amount 0..=MAX_AMOUNT
/// - due date not before invoice date
pub fn validate_invoice(draft: &InvoiceDraft) -> ValidationResult<()> {
    validate_required("company_id", &draft.company_id)?;

    if draft.items.is_empty() {
        return Err(ValidationError::required("items"));
    }
    let mut subtotal = Money::zero();
    for item in &draft.items {
        let amount = validate_invoice_item(item)?;
        subtotal = subtotal
            .checked_add(amount)
            .ok_or_else(|| too_large("subtotal", MAX_AMOUNT))?;
        validate_amount("subtotal", subtotal)?;
    }

    validate_amount("tax", draft.tax)?;
    validate_amount("discount", draft.discount)?;
    validate_amount("paid_amount", draft.paid_amount)?;
    validate_date_order("due_date", draft.due_date, "date", draft.date)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
