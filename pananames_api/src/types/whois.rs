use serde::{Deserialize, Serialize};

use super::{null_as_default, Contact};

/// WHOIS contacts of a domain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WhoisInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub whois_privacy: bool,
    /// True when the contacts are what the public WHOIS shows.
    #[serde(deserialize_with = "null_as_default")]
    pub preview: bool,
    pub registrant_contact: Option<Contact>,
    pub admin_contact: Option<Contact>,
    pub tech_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
}
zero_timestamps!(WhoisInfo {});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WhoisPrivacy {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}
zero_timestamps!(WhoisPrivacy {});
