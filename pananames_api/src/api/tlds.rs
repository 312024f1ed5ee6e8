use reqwest::Method;

use super::path_segment;
use crate::{
    options::GetEmailsOptions,
    request::RequestOption,
    types::{Email, Pagination, Tld, TldNotice},
    Client, Error,
};

impl Client {
    /// Fetches every TLD the registrar offers, with prices and promotions.
    pub async fn get_tlds(&self, options: &[&dyn RequestOption]) -> Result<Vec<Tld>, Error> {
        let resp = self
            .fetch::<Vec<Tld>, ()>(Method::GET, "tlds", None, options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches registration notices for one TLD.
    pub async fn get_tld_add_req(
        &self,
        tld: &str,
        options: &[&dyn RequestOption],
    ) -> Result<TldNotice, Error> {
        let path = format!("tlds/{}/add_req", path_segment(tld));
        let resp = self
            .fetch::<TldNotice, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches registration notices for all TLDs.
    pub async fn get_tld_add_req_list(
        &self,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<TldNotice>, Error> {
        let resp = self
            .fetch::<Vec<TldNotice>, ()>(Method::GET, "add_req_list", None, options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches a page of registrant emails tied to the account.
    pub async fn get_emails(
        &self,
        opt: &GetEmailsOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(Vec<Email>, Pagination), Error> {
        self.fetch_list("emails", opt, options).await
    }
}
