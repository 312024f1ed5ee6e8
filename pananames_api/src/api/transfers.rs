use reqwest::Method;

use super::path_segment;
use crate::{
    options::{CancelTransferInOptions, GetTransfersInOptions, InitTransferInOptions},
    request::RequestOption,
    types::{Pagination, TransferIn},
    Client, Error,
};

impl Client {
    /// Fetches a page of active incoming transfers.
    pub async fn get_transfers_in(
        &self,
        opt: &GetTransfersInOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(Vec<TransferIn>, Pagination), Error> {
        self.fetch_list("transfers_in", opt, options).await
    }

    /// Starts transferring a domain into the account.
    pub async fn init_transfer_in(
        &self,
        opt: &InitTransferInOptions,
        options: &[&dyn RequestOption],
    ) -> Result<TransferIn, Error> {
        let resp = self
            .fetch(Method::POST, "transfers_in", Some(opt), options)
            .await?;
        Ok(resp.data)
    }

    pub async fn cancel_transfer_in(
        &self,
        opt: &CancelTransferInOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        self.fetch_empty(Method::DELETE, "transfers_in", Some(opt), options)
            .await
    }

    /// Unlocks the domain and emails the auth code to the registrant.
    pub async fn init_transfer_out(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/transfer_out", path_segment(domain));
        self.fetch_empty::<()>(Method::PUT, &path, None, options)
            .await
    }

    /// Cancels an outgoing transfer and locks the domain again.
    pub async fn cancel_transfer_out(
        &self,
        domain: &str,
        options: &[&dyn RequestOption],
    ) -> Result<(), Error> {
        let path = format!("domains/{}/transfer_out", path_segment(domain));
        self.fetch_empty::<()>(Method::DELETE, &path, None, options)
            .await
    }
}
