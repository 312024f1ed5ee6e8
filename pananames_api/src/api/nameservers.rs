use reqwest::Method;

use super::path_segment;
use crate::{
    options::{
        ChildNameServerOptions, DeleteChildNameServerOptions, DeleteNameServerRecordOptions,
        EnableDnsSecOptions, SetNameServersOptions,
    },
    request::RequestOption,
    types::{ChildNameServer, DnsSec, NameServerRecord, NameServers},
    Client, Error,
};

impl Client {
    pub async fn get_name_servers(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<NameServers, Error> {
        let path = format!("domains/{}/name_servers", path_segment(domain));
        let resp = self
            .fetch::<NameServers, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    /// Replaces the domain's delegated name servers.
    pub async fn set_name_servers(
        &self,
        domain: &str,
        opt: &SetNameServersOptions,
        options: &[&dyn RequestOption],
    ) -> Result<NameServers, Error> {
        let path = format!("domains/{}/name_servers", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    pub async fn delete_name_servers(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/name_servers", path_segment(domain));
        self.fetch_empty::<()>(Method::DELETE, &path, None, options)
            .await
    }

    pub async fn get_child_name_servers(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<ChildNameServer>, Error> {
        let path = format!("domains/{}/child_name_servers", path_segment(domain));
        let resp = self
            .fetch::<Vec<ChildNameServer>, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn add_child_name_server(
        &self,
        domain: &str,
        opt: &ChildNameServerOptions,
        options: &[&dyn RequestOption],
    ) -> Result<ChildNameServer, Error> {
        let path = format!("domains/{}/child_name_servers", path_segment(domain));
        let resp = self.fetch(Method::POST, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    pub async fn update_child_name_server(
        &self,
        domain: &str,
        opt: &ChildNameServerOptions,
        options: &[&dyn RequestOption],
    ) -> Result<ChildNameServer, Error> {
        let path = format!("domains/{}/child_name_servers", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    /// Deletes the child name server named in `opt`; the host name travels in
    /// the DELETE body.
    pub async fn delete_child_name_server(
        &self,
        domain: &str,
        opt: &DeleteChildNameServerOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/child_name_servers", path_segment(domain));
        self.fetch_empty(Method::DELETE, &path, Some(opt), options)
            .await
    }

    pub async fn get_name_server_records(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<Vec<NameServerRecord>, Error> {
        let path = format!("domains/{}/name_server_records", path_segment(domain));
        let resp = self
            .fetch::<Vec<NameServerRecord>, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn add_name_server_record(
        &self,
        domain: &str,
        record: &NameServerRecord,
        options: &[&dyn RequestOption],
    ) -> Result<NameServerRecord, Error> {
        let path = format!("domains/{}/name_server_records", path_segment(domain));
        let resp = self
            .fetch(Method::POST, &path, Some(record), options)
            .await?;
        Ok(resp.data)
    }

    pub async fn update_name_server_record(
        &self,
        domain: &str,
        record: &NameServerRecord,
        options: &[&dyn RequestOption],
    ) -> Result<NameServerRecord, Error> {
        let path = format!("domains/{}/name_server_records", path_segment(domain));
        let resp = self
            .fetch(Method::PUT, &path, Some(record), options)
            .await?;
        Ok(resp.data)
    }

    /// Deletes the record whose id is given in `opt`.
    pub async fn delete_name_server_record(
        &self,
        domain: &str,
        opt: &DeleteNameServerRecordOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/name_server_records", path_segment(domain));
        self.fetch_empty(Method::DELETE, &path, Some(opt), options)
            .await
    }

    /// Creates several records in one call. An empty list is rejected
    /// without contacting the API.
    pub async fn set_bulk_name_server_records(
        &self,
        domain: &str,
        records: &[NameServerRecord],
        options: &[&dyn RequestOption],
    ) -> Result<Vec<NameServerRecord>, Error> {
        self.bulk_name_server_records(Method::POST, domain, records, options)
            .await
    }

    /// Updates several records in one call. An empty list is rejected
    /// without contacting the API.
    pub async fn update_bulk_name_server_records(
        &self,
        domain: &str,
        records: &[NameServerRecord],
        options: &[&dyn RequestOption],
    ) -> Result<Vec<NameServerRecord>, Error> {
        self.bulk_name_server_records(Method::PUT, domain, records, options)
            .await
    }

    async fn bulk_name_server_records(
        &self,
        method: Method,
        domain: &str,
        records: &[NameServerRecord],
        options: &[&dyn RequestOption],
    ) -> Result<Vec<NameServerRecord>, Error> {
        if records.is_empty() {
            return Err(Error::InvalidInput(
                "name server record list can't be empty".to_string(),
            ));
        }
        let path = format!("domains/{}/bulk_name_server_records", path_segment(domain));
        let resp = self.fetch(method, &path, Some(records), options).await?;
        Ok(resp.data)
    }

    pub async fn get_dnssec(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<DnsSec, Error> {
        let path = format!("domains/{}/dnssec", path_segment(domain));
        let resp = self
            .fetch::<DnsSec, ()>(Method::GET, &path, None, options)
            .await?;
        Ok(resp.data)
    }

    pub async fn enable_dnssec(
        &self,
        domain: &str,
        opt: &EnableDnsSecOptions,
        options: &[&dyn RequestOption],
    ) -> Result<DnsSec, Error> {
        let path = format!("domains/{}/dnssec", path_segment(domain));
        let resp = self.fetch(Method::PUT, &path, Some(opt), options).await?;
        Ok(resp.data)
    }

    pub async fn disable_dnssec(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<DnsSec, Error> {
        let path = format!("domains/{}/dnssec", path_segment(domain));
        let resp = self
            .fetch::<DnsSec, ()>(Method::DELETE, &path, None, options)
            .await?;
        Ok(resp.data)
    }
}
