use serde::Serialize;

use super::common::{is_zero_f64, ListOptions, ListQuery};
use crate::types::{Contact, NameServerRecord, NameServers};

/// Body of `init_transfer_in`. WHOIS contacts must be accurate.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct InitTransferInOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_code: String,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub premium_price: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub whois_privacy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<NameServers>,
    #[serde(
        rename = "name_servers_records",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub name_server_records: Vec<NameServerRecord>,
}

/// Filters for `get_transfers_in`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTransfersInOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain_like: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl ListQuery for GetTransfersInOptions {
    fn get_list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl GetTransfersInOptions {
    pub fn with_domain_like(mut self, domain_like: &str) -> Self {
        self.domain_like = domain_like.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }
}

/// Body of `cancel_transfer_in`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelTransferInOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
}
