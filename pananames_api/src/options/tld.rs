use serde::Serialize;

use super::common::{ListOptions, ListQuery};

/// Filters for `get_emails`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GetEmailsOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email_like: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email_status: String,
}

impl ListQuery for GetEmailsOptions {
    fn get_list_options(&mut self) -> &mut ListOptions {
        &mut self.list
    }
}

impl GetEmailsOptions {
    pub fn with_email_like(mut self, email_like: &str) -> Self {
        self.email_like = email_like.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_email_status(mut self, email_status: &str) -> Self {
        self.email_status = email_status.to_string();
        self
    }
}
