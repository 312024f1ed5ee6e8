use reqwest::Method;

use super::path_segment;
use crate::{
    options::{EnableBulkDomainRedirectOptions, EnableDomainRedirectOptions},
    request::RequestOption,
    types::{Redirect, RedirectBulk},
    Client, Error,
};

impl Client {
    pub async fn get_domain_redirect(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Redirect, Error> {
        let path = format!("domains/{}/redirect", path_segment(domain));
        let resp = self
            .fetch::<Redirect, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Enables or updates forwarding for the domain.
    pub async fn enable_domain_redirect(
        &self,
        domain: &str,
        opt: &EnableDomainRedirectOptions,
        options: &[&dyn RequestOption],
    ) -> Result<Redirect, Error> {
        let path = format!("domains/{}/redirect", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    pub async fn disable_domain_redirect(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/redirect", path_segment(domain));
        self.fetch_empty::<()>(Method::DELETE, &path, None, options)
            .await
    }

    /// Queues forwarding for many domains. The report arrives by email.
    pub async fn enable_bulk_domain_redirect(
        &self,
        opt: &EnableBulkDomainRedirectOptions,
        options: &[&dyn RequestOption],
    ) -> Result<RedirectBulk, Error> {
        if opt.domain_list.is_empty() {
            return Err(Error::InvalidInput(
                "EnableBulkDomainRedirectOptions.domain_list can't be empty".to_string(),
            ));
        }
        let resp = self
            .fetch(Method::PUT, "domains/bulk_redirect", Some(opt), options)
            .await?;
        Ok(resp.data)
    }
}
