//! # Company Directory
//!
//! Resolves `company_id` references to display names.
//!
//! Companies can be deleted while expenses and invoices still point at them.
//! Those dangling references resolve to [`UNKNOWN_COMPANY`] instead of
//! failing, so list views, search and exports keep working.

use std::collections::HashMap;

use crate::types::Company;
use crate::UNKNOWN_COMPANY;

/// Borrowed id → name index over a company collection.
///
/// ```rust
/// use bizdesk_core::{Company, CompanyDirectory};
///
/// let companies = vec![Company {
///     id: "company-1".into(),
///     name: "Acme Corporation".into(),
///     contact_name: None,
///     contact_email: None,
///     contact_phone: None,
///     address: None,
/// }];
/// let directory = CompanyDirectory::new(&companies);
///
/// assert_eq!(directory.name_of("company-1"), "Acme Corporation");
/// assert_eq!(directory.name_of("company-gone"), "Unknown Company");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> CompanyDirectory<'a> {
    pub fn new(companies: &'a [Company]) -> Self {
        let names = companies
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();
        CompanyDirectory { names }
    }

    /// Display name for a company id, or "Unknown Company".
    pub fn name_of(&self, company_id: &str) -> &'a str {
        self.names
            .get(company_id)
            .copied()
            .unwrap_or(UNKNOWN_COMPANY)
    }

    pub fn contains(&self, company_id: &str) -> bool {
        self.names.contains_key(company_id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompanyDraft;

    #[test]
    fn test_resolves_known_and_unknown_ids() {
        let companies = vec![
            CompanyDraft::named("Acme Corporation").into_company("company-a".to_string()),
            CompanyDraft::named("Globex Inc").into_company("company-g".to_string()),
        ];
        let directory = CompanyDirectory::new(&companies);

        assert_eq!(directory.len(), 2);
        assert!(directory.contains("company-g"));
        assert_eq!(directory.name_of("company-g"), "Globex Inc");
        assert_eq!(directory.name_of("company-x"), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_empty_directory_resolves_everything_to_unknown() {
        let directory = CompanyDirectory::default();
        assert!(directory.is_empty());
        assert_eq!(directory.name_of(""), UNKNOWN_COMPANY);
    }
}
