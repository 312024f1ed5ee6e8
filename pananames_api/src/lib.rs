//! Typed async client for the Pananames registrar merchant API.
//!
//! Every call is one HTTP round trip: options are encoded as a query string
//! for reads and as a JSON body for writes, the `{data, meta}` envelope is
//! unwrapped into a typed value, and zero timestamps in the result are
//! reported as `None`.

mod api;
mod client;
mod errors;
mod options;
mod request;
pub mod types;
mod user_agent;

pub use self::client::{Client, ClientBuilder, API_VERSION_PATH, DEFAULT_BASE_URL};
pub use self::errors::{ApiError, Error, ErrorResponse};
pub use self::options::{
    CancelTransferInOptions, CheckDomainsBulkOptions, ChildNameServerOptions,
    DeleteChildNameServerOptions, DeleteNameServerRecordOptions, EnableBulkDomainRedirectOptions,
    EnableDnsSecOptions, EnableDomainRedirectOptions, GetAccountPaymentsOptions,
    GetDomainsOptions, GetEmailsOptions, GetTransfersInOptions, GetWhoisInfoOptions,
    InitTransferInOptions, ListOptions, ListQuery, RegisterDomainOptions, RenewDomainOptions,
    SetNameServersOptions, UpdateWhoisInfoOptions,
};
pub use self::request::{RequestOption, WithHeader, WithTimeout};
pub use reqwest::Method;
