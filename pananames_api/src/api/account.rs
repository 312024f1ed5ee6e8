use reqwest::Method;

use crate::{
    options::GetAccountPaymentsOptions,
    request::RequestOption,
    types::{Balance, Pagination, Payment},
    Client, Error,
};

impl Client {
    /// Fetches the current account balance.
    pub async fn get_account_balance(
        &self,
        options: &[&dyn RequestOption],
    ) -> Result<Balance, Error> {
        let resp = self
            .fetch::<Balance, ()>(Method::GET, "account/balance", None, options)
            .await?;
        Ok(resp.data)
    }

    /// Fetches a page of account payments.
    pub async fn get_account_payments(
        &self,
        opt: &GetAccountPaymentsOptions,
        options: &[&dyn RequestOption],
    ) -> Result<(Vec<Payment>, Pagination), Error> {
        self.fetch_list("account/payments", opt, options).await
    }
}
