use serde::{Deserialize, Serialize};

use super::{null_as_default, Contact, NameServerRecord, NameServers, Timestamp};

/// An incoming transfer in progress.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TransferIn {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_status: String,
    pub init_date: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub premium_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub whois_privacy: bool,
    pub registrant_contact: Option<Contact>,
    pub admin_contact: Option<Contact>,
    pub tech_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
    pub name_servers: Option<NameServers>,
    #[serde(deserialize_with = "null_as_default")]
    pub name_server_records: Vec<NameServerRecord>,
}
zero_timestamps!(TransferIn { init_date });
