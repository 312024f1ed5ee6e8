use serde::Serialize;

use super::common::{is_zero, is_zero_f64, ListOptions, ListQuery};
use crate::types::Contact;

/// Filters for `get_domains`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDomainsOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain_like: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lock_status: String,
}

impl ListQuery for GetDomainsOptions {
    fn get_list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl GetDomainsOptions {
    pub fn with_domain_like(mut self, domain_like: &str) -> Self {
        self.domain_like = domain_like.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_lock_status(mut self, lock_status: &str) -> Self {
        self.lock_status = lock_status.to_string();
        self
    }
}

/// Names to check in one `check_domains_bulk` call. Must not be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckDomainsBulkOptions {
    pub domains: Vec<String>,
}

impl CheckDomainsBulkOptions {
    pub fn new<S: AsRef<str>>(domains: &[S]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.as_ref().to_string()).collect(),
        }
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domains.push(domain.to_string());
        self
    }
}

/// Wire form of [`CheckDomainsBulkOptions`]: a single comma-joined parameter.
#[derive(Serialize)]
pub(crate) struct EncodedDomainsBulk {
    pub domains: String,
}

impl From<&CheckDomainsBulkOptions> for EncodedDomainsBulk {
    fn from(opt: &CheckDomainsBulkOptions) -> Self {
        Self {
            domains: opt.domains.join(","),
        }
    }
}

/// Body of `register_domain`. The premium price comes from `check_domain`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RegisterDomainOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    /// Registration period in years.
    #[serde(skip_serializing_if = "is_zero")]
    pub period: i64,
    pub whois_privacy: bool,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub premium_price: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub claims_accepted: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub add_req_accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<Contact>,
}

impl RegisterDomainOptions {
    /// Registers `domain` for `period` years with the same contact in every role.
    pub fn with_contact(domain: &str, period: i64, contact: Contact) -> Self {
        Self {
            domain: domain.to_string(),
            period,
            registrant_contact: Some(contact.clone()),
            admin_contact: Some(contact.clone()),
            tech_contact: Some(contact.clone()),
            billing_contact: Some(contact),
            ..Default::default()
        }
    }
}

/// Body of `renew_domain`. Renewal periods range from 1 to 10 years.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RenewDomainOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub period: String,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub premium_price: f64,
}
