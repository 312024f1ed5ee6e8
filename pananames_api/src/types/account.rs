//! Account balance and payment history.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Timestamp};

/// Current account balance.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Balance {
    #[serde(deserialize_with = "null_as_default")]
    pub balance: f64,
}
zero_timestamps!(Balance {});

/// A single charge or top-up on the account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Payment {
    #[serde(rename = "txid", deserialize_with = "null_as_default")]
    pub tx_id: String,
    #[serde(rename = "txdate")]
    pub tx_date: Option<Timestamp>,
    #[serde(rename = "txtype", deserialize_with = "null_as_default")]
    pub tx_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}
zero_timestamps!(Payment { tx_date });
