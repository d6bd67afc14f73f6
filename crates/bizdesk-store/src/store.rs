//! # Record Store
//!
//! The single owner of every company, expense and invoice.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RecordStore                                      │
//! │                                                                         │
//! │   companies: Collection<Company>                                       │
//! │   expenses:  Collection<Expense>     ◄── company_id refers to a       │
//! │   invoices:  Collection<Invoice>     ◄── company by id (no cascade)   │
//! │                                                                         │
//! │   issued_numbers: HashSet<String>    every invoice number handed out  │
//! │   rng: StdRng                        suffix source for new numbers    │
//! │                                                                         │
//! │   Mutations take &mut self. Sharing across sessions is the app        │
//! │   layer's job (Arc<Mutex<RecordStore>>).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bizdesk_core::CompanyDraft;
//! use bizdesk_store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! let acme = store.create_company(CompanyDraft::named("Acme"));
//!
//! assert!(acme.id.starts_with("company-"));
//! assert_eq!(store.get_company(&acme.id), Some(&acme));
//! ```

use std::collections::HashSet;

use bizdesk_core::invoice_number::generate_invoice_number;
use bizdesk_core::{
    Company, CompanyDirectory, CompanyDraft, Expense, ExpenseDraft, Invoice, InvoiceDraft,
    RecordKind,
};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::collection::{Collection, Record};
use crate::error::StoreResult;

/// How many suffixes are tried before a duplicate invoice number is
/// accepted.
pub const MAX_NUMBER_ATTEMPTS: usize = 8;

/// In-memory record store.
#[derive(Debug)]
pub struct RecordStore {
    companies: Collection<Company>,
    expenses: Collection<Expense>,
    invoices: Collection<Invoice>,
    issued_numbers: HashSet<String>,
    rng: StdRng,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// An empty store with an OS-seeded number generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An empty store whose generated invoice numbers are reproducible.
    pub fn with_rng_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RecordStore {
            companies: Collection::new(),
            expenses: Collection::new(),
            invoices: Collection::new(),
            issued_numbers: HashSet::new(),
            rng,
        }
    }

    fn new_id<T: Record>() -> String {
        format!("{}-{}", T::KIND.id_prefix(), Uuid::new_v4())
    }

    // =========================================================================
    // Companies
    // =========================================================================

    pub fn create_company(&mut self, draft: CompanyDraft) -> Company {
        let company = draft.into_company(Self::new_id::<Company>());
        info!(id = %company.id, name = %company.name, "Created company");
        self.companies.insert(company.clone());
        company
    }

    pub fn get_company(&self, id: &str) -> Option<&Company> {
        self.companies.get(id)
    }

    pub fn update_company(&mut self, company: Company) -> StoreResult<()> {
        let id = company.id.clone();
        self.companies.update(company)?;
        info!(id = %id, "Updated company");
        Ok(())
    }

    /// Removes a company. Expenses and invoices that refer to it are kept
    /// and show up as "Unknown Company".
    pub fn delete_company(&mut self, id: &str) -> StoreResult<Company> {
        let removed = self.companies.remove(id)?;
        let orphans = self.expenses.all().iter().filter(|e| e.company_id == id).count()
            + self.invoices.all().iter().filter(|i| i.company_id == id).count();
        info!(id = %id, orphans, "Deleted company");
        Ok(removed)
    }

    pub fn companies(&self) -> &[Company] {
        self.companies.all()
    }

    /// Name lookup over the current companies.
    pub fn directory(&self) -> CompanyDirectory<'_> {
        CompanyDirectory::new(self.companies.all())
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    pub fn create_expense(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = draft.into_expense(Self::new_id::<Expense>());
        info!(
            id = %expense.id,
            company_id = %expense.company_id,
            amount = %expense.amount,
            "Created expense"
        );
        self.expenses.insert(expense.clone());
        expense
    }

    pub fn get_expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.get(id)
    }

    pub fn update_expense(&mut self, expense: Expense) -> StoreResult<()> {
        let id = expense.id.clone();
        self.expenses.update(expense)?;
        info!(id = %id, "Updated expense");
        Ok(())
    }

    pub fn delete_expense(&mut self, id: &str) -> StoreResult<Expense> {
        let removed = self.expenses.remove(id)?;
        info!(id = %id, "Deleted expense");
        Ok(removed)
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.all()
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// Creates an invoice numbered from today's date when the draft has no
    /// number of its own.
    pub fn create_invoice(&mut self, draft: InvoiceDraft) -> Invoice {
        self.create_invoice_on(draft, Utc::now().date_naive())
    }

    /// Like [`RecordStore::create_invoice`], with an explicit creation date
    /// for the generated number.
    pub fn create_invoice_on(&mut self, draft: InvoiceDraft, created_on: NaiveDate) -> Invoice {
        let number = match draft.supplied_number() {
            Some(number) => number.to_string(),
            None => self.next_invoice_number(created_on),
        };
        self.issued_numbers.insert(number.clone());

        let invoice = draft.into_invoice(Self::new_id::<Invoice>(), number);
        info!(
            id = %invoice.id,
            number = %invoice.invoice_number,
            total = %invoice.total_amount(),
            "Created invoice"
        );
        self.invoices.insert(invoice.clone());
        invoice
    }

    pub fn get_invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.get(id)
    }

    pub fn update_invoice(&mut self, invoice: Invoice) -> StoreResult<()> {
        let id = invoice.id.clone();
        let number = invoice.invoice_number.clone();
        self.invoices.update(invoice)?;
        self.issued_numbers.insert(number);
        info!(id = %id, "Updated invoice");
        Ok(())
    }

    /// Removes an invoice. Its number stays issued and is not handed out
    /// again.
    pub fn delete_invoice(&mut self, id: &str) -> StoreResult<Invoice> {
        let removed = self.invoices.remove(id)?;
        info!(id = %id, number = %removed.invoice_number, "Deleted invoice");
        Ok(removed)
    }

    pub fn invoices(&self) -> &[Invoice] {
        self.invoices.all()
    }

    /// Whether `number` was ever assigned by or supplied to this store.
    pub fn is_number_issued(&self, number: &str) -> bool {
        self.issued_numbers.contains(number)
    }

    /// Draws suffixes until an unused number comes up, at most
    /// [`MAX_NUMBER_ATTEMPTS`] times. After that the last draw is used even
    /// though it collides.
    fn next_invoice_number(&mut self, created_on: NaiveDate) -> String {
        let mut candidate = generate_invoice_number(created_on, &mut self.rng);
        for attempt in 1..MAX_NUMBER_ATTEMPTS {
            if !self.issued_numbers.contains(&candidate) {
                return candidate;
            }
            debug!(attempt, number = %candidate, "Invoice number taken, drawing again");
            candidate = generate_invoice_number(created_on, &mut self.rng);
        }

        if self.issued_numbers.contains(&candidate) {
            warn!(
                number = %candidate,
                attempts = MAX_NUMBER_ATTEMPTS,
                "No unused invoice number found, accepting duplicate"
            );
        }
        candidate
    }

    /// Record counts per kind, for logging.
    pub fn counts(&self) -> [(RecordKind, usize); 3] {
        [
            (RecordKind::Company, self.companies.len()),
            (RecordKind::Expense, self.expenses.len()),
            (RecordKind::Invoice, self.invoices.len()),
        ]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use bizdesk_core::invoice_number::{is_invoice_number, SUFFIX_SPACE};
    use bizdesk_core::{ExpenseStatus, InvoiceItem, InvoiceStatus, Money, UNKNOWN_COMPANY};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense_draft(company_id: &str) -> ExpenseDraft {
        ExpenseDraft {
            company_id: company_id.to_string(),
            amount: Money::from_major(250),
            date: date(2024, 6, 3),
            description: "Trade show booth".to_string(),
            category: "Marketing".to_string(),
            project: None,
            status: ExpenseStatus::Pending,
            payment_date: None,
            payment_method: None,
        }
    }

    fn invoice_draft(company_id: &str, number: Option<&str>) -> InvoiceDraft {
        InvoiceDraft {
            company_id: company_id.to_string(),
            invoice_number: number.map(str::to_string),
            date: date(2024, 6, 1),
            due_date: date(2024, 6, 30),
            status: InvoiceStatus::Unpaid,
            items: vec![InvoiceItem::new("Workshop", 2, Money::from_major(800))],
            tax: Money::zero(),
            discount: Money::zero(),
            notes: None,
            paid_amount: Money::zero(),
        }
    }

    #[test]
    fn test_company_round_trip() {
        let mut store = RecordStore::with_rng_seed(1);
        let created = store.create_company(CompanyDraft::named("Acme"));
        assert_eq!(store.get_company(&created.id), Some(&created));

        let mut renamed = created.clone();
        renamed.name = "Acme Holdings".to_string();
        store.update_company(renamed.clone()).unwrap();
        assert_eq!(store.get_company(&created.id), Some(&renamed));

        store.delete_company(&created.id).unwrap();
        assert_eq!(store.get_company(&created.id), None);
        assert!(store.companies().is_empty());
    }

    #[test]
    fn test_ids_are_prefixed_and_unique() {
        let mut store = RecordStore::new();
        let a = store.create_expense(expense_draft("c1"));
        let b = store.create_expense(expense_draft("c1"));
        assert!(a.id.starts_with("expense-"));
        assert_ne!(a.id, b.id);
        assert_eq!(store.expenses().len(), 2);
    }

    #[test]
    fn test_expense_update_and_delete() {
        let mut store = RecordStore::new();
        let mut expense = store.create_expense(expense_draft("c1"));

        expense.status = ExpenseStatus::Paid;
        store.update_expense(expense.clone()).unwrap();
        assert_eq!(store.get_expense(&expense.id).unwrap().status, ExpenseStatus::Paid);

        let removed = store.delete_expense(&expense.id).unwrap();
        assert_eq!(removed, expense);
        assert!(store.get_expense(&expense.id).is_none());
    }

    #[test]
    fn test_missing_id_is_reported_and_state_untouched() {
        let mut store = RecordStore::new();
        let expense = store.create_expense(expense_draft("c1"));

        let mut ghost = expense.clone();
        ghost.id = "expense-missing".to_string();
        assert_eq!(
            store.update_expense(ghost),
            Err(StoreError::not_found(RecordKind::Expense, "expense-missing"))
        );
        assert!(store.delete_invoice("invoice-missing").is_err());

        assert_eq!(store.expenses(), &[expense]);
        assert!(store.invoices().is_empty());
    }

    #[test]
    fn test_deleted_company_resolves_to_unknown() {
        let mut store = RecordStore::new();
        let acme = store.create_company(CompanyDraft::named("Acme"));
        let expense = store.create_expense(expense_draft(&acme.id));
        assert_eq!(store.directory().name_of(&expense.company_id), "Acme");

        store.delete_company(&acme.id).unwrap();

        // The expense survives the delete.
        assert_eq!(store.get_expense(&expense.id), Some(&expense));
        assert_eq!(store.directory().name_of(&expense.company_id), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_generated_invoice_number_uses_creation_month() {
        let mut store = RecordStore::with_rng_seed(3);
        let invoice = store.create_invoice_on(invoice_draft("c1", None), date(2025, 2, 14));

        assert!(invoice.invoice_number.starts_with("INV-202502-"));
        assert!(is_invoice_number(&invoice.invoice_number));
        assert!(store.is_number_issued(&invoice.invoice_number));
        assert_eq!(invoice.total_amount(), Money::from_major(1600));
    }

    #[test]
    fn test_supplied_invoice_number_is_kept() {
        let mut store = RecordStore::new();
        let invoice = store.create_invoice(invoice_draft("c1", Some(" ACME-17 ")));
        assert_eq!(invoice.invoice_number, "ACME-17");
    }

    #[test]
    fn test_taken_number_is_drawn_again() {
        let created_on = date(2024, 7, 1);
        let first_draw = generate_invoice_number(created_on, &mut StdRng::seed_from_u64(9));

        let mut store = RecordStore::with_rng_seed(9);
        // A supplied number does not consume the generator.
        store.create_invoice_on(invoice_draft("c1", Some(&first_draw)), created_on);
        let generated = store.create_invoice_on(invoice_draft("c1", None), created_on);

        assert_ne!(generated.invoice_number, first_draw);
        assert!(generated.invoice_number.starts_with("INV-202407-"));
    }

    #[test]
    fn test_exhausted_month_accepts_duplicate() {
        let created_on = date(2024, 8, 1);
        let mut store = RecordStore::with_rng_seed(5);
        for suffix in 0..SUFFIX_SPACE {
            let number = format!("INV-202408-{:03}", suffix);
            store.create_invoice_on(invoice_draft("c1", Some(&number)), created_on);
        }

        let extra = store.create_invoice_on(invoice_draft("c1", None), created_on);
        assert!(extra.invoice_number.starts_with("INV-202408-"));
        assert_eq!(store.invoices().len(), SUFFIX_SPACE as usize + 1);
    }
}
