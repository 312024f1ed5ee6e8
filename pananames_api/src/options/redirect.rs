use serde::Serialize;

use crate::types::Redirect;

/// Body of `enable_domain_redirect`.
pub type EnableDomainRedirectOptions = Redirect;

/// Body of `enable_bulk_domain_redirect`. `domain_list` must not be empty.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EnableBulkDomainRedirectOptions {
    #[serde(flatten)]
    pub redirect: EnableDomainRedirectOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_list: Vec<String>,
}
