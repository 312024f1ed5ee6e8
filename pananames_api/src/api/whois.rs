use reqwest::Method;

use super::path_segment;
use crate::{
    options::{GetWhoisInfoOptions, UpdateWhoisInfoOptions},
    request::RequestOption,
    types::{WhoisInfo, WhoisPrivacy},
    Client, Error,
};

impl Client {
    /// Fetches WHOIS contacts. Only works for domains in the account.
    pub async fn get_whois_info(
        &self,
        domain: &str,
        opt: &GetWhoisInfoOptions,
        options: &[&dyn RequestOption],
    ) -> Result<WhoisInfo, Error> {
        let path = format!("domains/{}/whois", path_segment(domain));
        let resp = self.fetch(Method::GET, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    /// Updates WHOIS contacts. Returns the new contacts and the server's
    /// notice, which is non-empty when the change awaits email confirmation.
    pub async fn update_whois_info(
        &self,
        domain: &str,
        opt: &UpdateWhoisInfoOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(WhoisInfo, String), Error> {
        let path = format!("domains/{}/whois", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok((resp.data, resp.meta.notice))
    }

    pub async fn get_whois_privacy(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<WhoisPrivacy, Error> {
        let path = format!("domains/{}/whois_privacy", path_segment(domain));
        let resp = self
            .fetch::<WhoisPrivacy, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn enable_whois_privacy(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<WhoisPrivacy, Error> {
        let path = format!("domains/{}/whois_privacy", path_segment(domain));
        let resp = self
            .fetch::<WhoisPrivacy, ()>(Method::PUT, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn disable_whois_privacy(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<WhoisPrivacy, Error> {
        let path = format!("domains/{}/whois_privacy", path_segment(domain));
        let resp = self
            .fetch::<WhoisPrivacy, ()>(Method::DELETE, &path, None, options)
            .await?;
        Ok(resp.data)
    }
}
