mod common;
pub(crate) use self::common::append_query;
pub use self::common::{ListOptions, ListQuery};

mod account;
pub use self::account::GetAccountPaymentsOptions;

mod domain;
pub(crate) use self::domain::EncodedDomainsBulk;
pub use self::domain::{
    CheckDomainsBulkOptions, GetDomainsOptions, RegisterDomainOptions, RenewDomainOptions,
};

mod nameserver;
pub use self::nameserver::{
    ChildNameServerOptions, DeleteChildNameServerOptions, DeleteNameServerRecordOptions,
    EnableDnsSecOptions, SetNameServersOptions,
};

mod whois;
pub use self::whois::{GetWhoisInfoOptions, UpdateWhoisInfoOptions};

mod transfer;
pub use self::transfer::{CancelTransferInOptions, GetTransfersInOptions, InitTransferInOptions};

mod redirect;
pub use self::redirect::{EnableBulkDomainRedirectOptions, EnableDomainRedirectOptions};

mod tld;
pub use self::tld::GetEmailsOptions;
