//! # Seed Data
//!
//! The demo books the dashboard starts with: a handful of companies, a
//! quarter of expenses and three invoices in different states.
//!
//! ## Generated Records
//! - 4 companies; "Umbrella Logistics" has no expenses, so it never shows
//!   up in the per-company chart
//! - 8 expenses across January to March 2024, paid and pending
//! - 3 invoices: unpaid (4,750.00), partially paid (3,300.00 with 1,500.00
//!   received) and paid (1,200.00)

use bizdesk_core::{
    CompanyDraft, ExpenseDraft, ExpenseStatus, InvoiceDraft, InvoiceItem, InvoiceStatus, Money,
    PaymentMethod,
};
use chrono::NaiveDate;
use tracing::info;

use crate::store::RecordStore;

/// (name, contact name, contact email)
const COMPANIES: &[(&str, &str, &str)] = &[
    ("Acme Corporation", "Jane Cooper", "jane.cooper@acme.example"),
    ("Globex Industries", "Hank Scorpio", "hank@globex.example"),
    ("Initech Solutions", "Bill Lumbergh", "bill@initech.example"),
    ("Umbrella Logistics", "Alice Abernathy", "alice@umbrella.example"),
];

/// (company index, cents, date, description, category, project, paid on)
type ExpenseRow = (
    usize,
    i64,
    (i32, u32, u32),
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<(i32, u32, u32)>,
);

const EXPENSES: &[ExpenseRow] = &[
    (0, 125_000, (2024, 1, 8), "Office rent January", "Rent", None, Some((2024, 1, 10))),
    (0, 48_900, (2024, 1, 22), "Laptop docking stations", "Equipment", Some("Workspace refresh"), Some((2024, 1, 25))),
    (1, 320_000, (2024, 2, 5), "Branding materials", "Marketing", Some("Spring campaign"), None),
    (1, 75_050, (2024, 2, 19), "Trade show travel", "Travel", Some("Spring campaign"), Some((2024, 2, 28))),
    (2, 18_999, (2024, 2, 27), "Printer toner", "Office Supplies", None, None),
    (0, 125_000, (2024, 3, 8), "Office rent March", "Rent", None, None),
    (2, 210_000, (2024, 3, 12), "Payroll software licence", "Software", Some("Back office"), Some((2024, 3, 15))),
    (1, 9_500, (2024, 3, 20), "Courier fees", "Shipping", None, None),
];

fn on((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl RecordStore {
    /// A store holding the demo books.
    pub fn seeded() -> Self {
        let mut store = RecordStore::new();
        store.seed_mock_data();
        store
    }

    /// Adds the demo records to this store.
    pub fn seed_mock_data(&mut self) {
        let company_ids: Vec<String> = COMPANIES
            .iter()
            .map(|&(name, contact, email)| {
                self.create_company(CompanyDraft {
                    name: name.to_string(),
                    contact_name: Some(contact.to_string()),
                    contact_email: Some(email.to_string()),
                    contact_phone: None,
                    address: None,
                })
                .id
            })
            .collect();

        for &(company, cents, date, description, category, project, paid_on) in EXPENSES {
            let status = if paid_on.is_some() {
                ExpenseStatus::Paid
            } else {
                ExpenseStatus::Pending
            };
            self.create_expense(ExpenseDraft {
                company_id: company_ids[company].clone(),
                amount: Money::from_cents(cents),
                date: on(date),
                description: description.to_string(),
                category: category.to_string(),
                project: project.map(str::to_string),
                status,
                payment_date: paid_on.map(on),
                payment_method: paid_on.map(|_| PaymentMethod::BankTransfer),
            });
        }

        self.create_invoice(InvoiceDraft {
            company_id: company_ids[0].clone(),
            invoice_number: Some("INV-202403-001".to_string()),
            date: on((2024, 3, 1)),
            due_date: on((2024, 3, 31)),
            status: InvoiceStatus::Unpaid,
            items: vec![
                InvoiceItem::new("Website redesign (days)", 10, Money::from_major(400)),
                InvoiceItem::new("Hosting setup", 1, Money::from_major(500)),
            ],
            tax: Money::from_major(350),
            discount: Money::from_major(100),
            notes: Some("Net 30".to_string()),
            paid_amount: Money::zero(),
        });

        self.create_invoice(InvoiceDraft {
            company_id: company_ids[1].clone(),
            invoice_number: Some("INV-202403-002".to_string()),
            date: on((2024, 3, 5)),
            due_date: on((2024, 4, 4)),
            status: InvoiceStatus::PartiallyPaid,
            items: vec![InvoiceItem::new("Compliance audit", 3, Money::from_major(1000))],
            tax: Money::from_major(450),
            discount: Money::from_major(150),
            notes: None,
            paid_amount: Money::from_major(1500),
        });

        self.create_invoice(InvoiceDraft {
            company_id: company_ids[2].clone(),
            invoice_number: Some("INV-202402-015".to_string()),
            date: on((2024, 2, 1)),
            due_date: on((2024, 2, 15)),
            status: InvoiceStatus::Paid,
            items: vec![InvoiceItem::new("Support retainer", 1, Money::from_major(1200))],
            tax: Money::zero(),
            discount: Money::zero(),
            notes: None,
            paid_amount: Money::from_major(1200),
        });

        info!(
            companies = self.companies().len(),
            expenses = self.expenses().len(),
            invoices = self.invoices().len(),
            "Seeded mock data"
        );
    }
}
