use serde::Serialize;

use crate::types::{ChildNameServer, NameServers};

/// Body of `set_name_servers`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SetNameServersOptions {
    pub name_servers: NameServers,
}

impl SetNameServersOptions {
    pub fn new<S: AsRef<str>>(name_servers: &[S]) -> Self {
        Self {
            name_servers: name_servers.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Body of `add_child_name_server` and `update_child_name_server`.
pub type ChildNameServerOptions = ChildNameServer;

/// Body of `delete_child_name_server`, naming the host to remove.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteChildNameServerOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,
}

/// Body of `delete_name_server_record`, naming the record to remove.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteNameServerRecordOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Body of `enable_dnssec`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EnableDnsSecOptions {
    /// DS record data.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ds: String,
}
