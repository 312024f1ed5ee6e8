//! Name servers, DNS records, child name servers, and DNSSEC.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Delegated name server host names.
pub type NameServers = Vec<String>;

/// A DNS record hosted on the registrar's name servers.
///
/// Also used as the request body when adding or updating records, so every
/// field is always sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NameServerRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: i64,
}
zero_timestamps!(NameServerRecord {});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DnsSec {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ds_data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
}
zero_timestamps!(DnsSec {});

/// A glue record registered under the domain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChildNameServer {
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub ipv4: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub ipv6: String,
}
zero_timestamps!(ChildNameServer {});
