//! # Invoice Numbers
//!
//! Human-readable invoice numbers in the form `INV-YYYYMM-RRR`:
//!
//! - `YYYYMM`: year and month the invoice was created
//! - `RRR`: random number 000-999, zero padded
//!
//! With only a thousand suffixes per month, collisions are possible. The
//! generator does not check for them; the record store keeps the set of
//! issued numbers and asks for another one on a clash.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

pub const INVOICE_NUMBER_PREFIX: &str = "INV";

/// Number of distinct suffixes per month.
pub const SUFFIX_SPACE: u32 = 1000;

/// Generates an invoice number for `date` using `rng` for the suffix.
///
/// ```rust
/// use bizdesk_core::invoice_number::{generate_invoice_number, is_invoice_number};
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let number = generate_invoice_number(date, &mut rng);
///
/// assert!(number.starts_with("INV-202403-"));
/// assert!(is_invoice_number(&number));
/// ```
pub fn generate_invoice_number<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    let suffix = rng.gen_range(0..SUFFIX_SPACE);
    format!(
        "{}-{:04}{:02}-{:03}",
        INVOICE_NUMBER_PREFIX,
        date.year(),
        date.month(),
        suffix
    )
}

/// Whether `s` has the generated `INV-YYYYMM-RRR` shape.
///
/// Caller-supplied numbers do not have to match; this is for display and
/// tests.
pub fn is_invoice_number(s: &str) -> bool {
    let mut parts = s.split('-');
    let (Some(prefix), Some(period), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    let month_ok = period
        .get(4..)
        .and_then(|m| m.parse::<u32>().ok())
        .is_some_and(|m| (1..=12).contains(&m));

    prefix == INVOICE_NUMBER_PREFIX
        && period.len() == 6
        && all_digits(period)
        && month_ok
        && suffix.len() == 3
        && all_digits(suffix)
}
