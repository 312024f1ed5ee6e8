/// Implements [`ZeroTimestamps`] for a model struct by visiting the listed fields.
///
/// Only fields that are timestamps or composites containing timestamps need
/// to be listed; every other field is a leaf and is skipped.
macro_rules! zero_timestamps {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::types::ZeroTimestamps for $ty {
            fn clear_zero_timestamps(&mut self) {
                $( $crate::types::ZeroTimestamps::clear_zero_timestamps(&mut self.$field); )*
            }
        }
    };
}

mod time;
pub use self::time::{Date, Timestamp, ZeroTimestamps};

mod meta;
pub(crate) use self::meta::{null_as_default, Envelope};
pub use self::meta::{Meta, Pagination, Response};

mod account;
pub use self::account::{Balance, Payment};

mod domain;
pub use self::domain::{
    AutoRenew, Claim, ClaimContact, Contact, Domain, DomainCheck, Prices, Redeem, Renew,
};

mod nameserver;
pub use self::nameserver::{ChildNameServer, DnsSec, NameServerRecord, NameServers};

mod whois;
pub use self::whois::{WhoisInfo, WhoisPrivacy};

mod transfer;
pub use self::transfer::TransferIn;

mod redirect;
pub use self::redirect::{DomainRedirect, Redirect, RedirectBulk};

mod tld;
pub use self::tld::{DomainStatus, Email, PromoMultiYears, Tld, TldNotice};
