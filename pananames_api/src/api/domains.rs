use reqwest::Method;

use super::path_segment;
use crate::{
    options::{
        CheckDomainsBulkOptions, EncodedDomainsBulk, GetDomainsOptions, RegisterDomainOptions,
        RenewDomainOptions,
    },
    request::RequestOption,
    types::{AutoRenew, Claim, Domain, DomainCheck, Pagination, Redeem, Renew},
    Client, Error,
};

impl Client {
    /// Fetches a page of domains in the account.
    pub async fn get_domains(
        &self,
        opt: &GetDomainsOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(Vec<Domain>, Pagination), Error> {
        self.fetch_list("domains", opt, options).await
    }

    /// Registers a domain. Premium names need the price from [`Client::check_domain`].
    pub async fn register_domain(
        &self,
        opt: &RegisterDomainOptions,
        options: &[&dyn RequestOption],
    ) -> Result<Domain, Error> {
        let resp = self
            .fetch(Method::POST, "domains", Some(opt), options)
            .await?;
        Ok(resp.data)
    }

    pub async fn get_domain(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Domain, Error> {
        let path = format!("domains/{}", path_segment(domain));
        let resp = self
            .fetch::<Domain, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_domain(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}", path_segment(domain));
        self.fetch_empty::<()>(Method::DELETE, &path, None, options)
            .await
    }

    /// Checks availability and registration, renewal, transfer, and
    /// redemption prices for a single name.
    pub async fn check_domain(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<DomainCheck, Error> {
        let path = format!("domains/{}/check", path_segment(domain));
        let resp = self
            .fetch::<DomainCheck, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Checks several names at once. An empty list is rejected without
    /// contacting the API.
    pub async fn check_domains_bulk(
        &self,
        opt: &CheckDomainsBulkOptions,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<DomainCheck>, Error> {
        if opt.domains.is_empty() {
            return Err(Error::InvalidInput(
                "CheckDomainsBulkOptions.domains can't be empty".to_string(),
            ));
        }
        let query = EncodedDomainsBulk::from(opt);
        let resp = self
            .fetch(Method::GET, "domains/bulk_check", Some(&query), options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches trademark claim notices for a name.
    pub async fn get_domain_claim(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<Claim>, Error> {
        let path = format!("domains/{}/claim", path_segment(domain));
        let resp = self
            .fetch::<Vec<Claim>, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches the EPP status codes set on the domain.
    pub async fn get_domain_status_codes(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<String>, Error> {
        let path = format!("domains/{}/status_codes", path_segment(domain));
        let resp = self
            .fetch::<Vec<String>, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn enable_domain_auto_renew(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<AutoRenew, Error> {
        let path = format!("domains/{}/auto_renew", path_segment(domain));
        let resp = self
            .fetch::<AutoRenew, ()>(Method::PUT, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn disable_domain_auto_renew(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<AutoRenew, Error> {
        let path = format!("domains/{}/auto_renew", path_segment(domain));
        let resp = self
            .fetch::<AutoRenew, ()>(Method::DELETE, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Renews the domain for 1 to 10 years. Allowed periods per TLD are
    /// reported by [`Client::get_tlds`].
    pub async fn renew_domain(
        &self,
        domain: &str,
        opt: &RenewDomainOptions,
        options: &[&dyn RequestOption],
    ) -> Result<Renew, Error> {
        let path = format!("domains/{}/renew", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    /// Restores a domain during its redemption grace period.
    pub async fn redeem_domain(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Redeem, Error> {
        let path = format!("domains/{}/redeem", path_segment(domain));
        let resp = self
            .fetch::<Redeem, ()>(Method::PUT, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Resends the registrant verification email.
    pub async fn resend_domain_email(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/resend", path_segment(domain));
        self.fetch_empty::<()>(Method::PUT, &path, None, options)
            .await
    }
}
