//! TLD metadata, registration notices, and account emails.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{null_as_default, Prices, Timestamp};

/// A TLD offered by the registrar.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tld {
    #[serde(deserialize_with = "null_as_default")]
    pub tld: String,
    #[serde(deserialize_with = "null_as_default")]
    pub idn: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dnssec: bool,
    pub prices: Option<Prices>,
    pub promo_prices: Option<Prices>,
    #[serde(rename = "promo_untill")]
    pub promo_until: Option<Timestamp>,
    #[serde(rename = "promo_two_years_untill")]
    pub promo_two_years_until: Option<Timestamp>,
    pub promo_two_years_prices: Option<Prices>,
    /// Multi-year promotions keyed by registration period in years.
    #[serde(deserialize_with = "null_as_default")]
    pub promo_multi_years_prices: HashMap<String, PromoMultiYears>,
}
zero_timestamps!(Tld {
    promo_until,
    promo_two_years_until,
    promo_multi_years_prices,
});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PromoMultiYears {
    pub promo_multi_years_prices: Option<Prices>,
    #[serde(rename = "promo_multi_years_untill")]
    pub promo_multi_years_until: Option<Timestamp>,
}
zero_timestamps!(PromoMultiYears { promo_multi_years_until });

/// Registration requirements a TLD imposes on registrants.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TldNotice {
    #[serde(deserialize_with = "null_as_default")]
    pub tld: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notices: Vec<String>,
}
zero_timestamps!(TldNotice {});

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DomainStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// A registrant email address and its verification state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Email {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub first_email_date: Option<Timestamp>,
    pub verify_date: Option<Timestamp>,
    pub suspend_date: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domains: Vec<DomainStatus>,
}
zero_timestamps!(Email {
    first_email_date,
    verify_date,
    suspend_date,
});
