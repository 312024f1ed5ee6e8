use serde::Serialize;

use super::common::{ListOptions, ListQuery};

/// Filters for `get_account_payments`. Every field except `domain_like` is
/// sent even when empty.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccountPaymentsOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain_like: String,
    pub pay_type: String,
    /// Start of the period, `YYYY-MM-DD`.
    pub date_from: String,
    /// End of the period, `YYYY-MM-DD`.
    pub date_end: String,
}

impl ListQuery for GetAccountPaymentsOptions {
    fn get_list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl GetAccountPaymentsOptions {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_domain_like(mut self, domain_like: &str) -> Self {
        self.domain_like = domain_like.to_string();
        self
    }

    pub fn with_pay_type(mut self, pay_type: &str) -> Self {
        self.pay_type = pay_type.to_string();
        self
    }

    pub fn with_period(mut self, date_from: &str, date_end: &str) -> Self {
        self.date_from = date_from.to_string();
        self.date_end = date_end.to_string();
        self
    }
}
