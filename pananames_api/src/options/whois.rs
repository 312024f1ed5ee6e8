use serde::Serialize;

use crate::types::Contact;

/// Query for `get_whois_info`.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetWhoisInfoOptions {
    /// Return the contacts as the public WHOIS shows them.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preview: bool,
}

/// Body of `update_whois_info`. Only the contacts given are changed.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateWhoisInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<Contact>,
}
