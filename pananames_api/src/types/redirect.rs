//! URL forwarding for domains.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Redirect target and masking (framed forwarding) settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Redirect {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_as_default")]
    pub masking_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub masking_title: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub masking_desc: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub masking_kwd: String,
}
zero_timestamps!(Redirect {});

/// Result of queueing a bulk redirect. The report is delivered by email.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RedirectBulk {
    #[serde(flatten)]
    pub redirect: Redirect,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_list: Vec<DomainRedirect>,
}
zero_timestamps!(RedirectBulk {});

/// Per-domain outcome of a bulk redirect.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DomainRedirect {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_queued: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
}
