//! Domain records, availability checks, pricing, and contacts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{null_as_default, ChildNameServer, Date, NameServers, Timestamp};

/// A domain held in the account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_idn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub premium: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub auto_renew: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub whois_privacy: bool,
    /// `locked` or `unlocked`.
    #[serde(deserialize_with = "null_as_default")]
    pub lock_status: String,
    pub registration_date: Option<Timestamp>,
    pub expiration_date: Option<Timestamp>,
    /// Scheduled deletion date. Only the calendar day is reported.
    pub deletion_date: Option<Date>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub name_servers: Option<NameServers>,
    #[serde(deserialize_with = "null_as_default")]
    pub child_name_servers: Vec<ChildNameServer>,
}
zero_timestamps!(Domain {
    registration_date,
    expiration_date,
    deletion_date,
});

/// Availability and pricing of a domain name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DomainCheck {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_idn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub premium: bool,
    pub prices: Option<Prices>,
    pub promo_prices: Option<Prices>,
    pub promo_two_years_prices: Option<Prices>,
    /// Promotional prices keyed by registration period in years.
    #[serde(deserialize_with = "null_as_default")]
    pub promo_multi_years_prices: HashMap<String, Prices>,
    /// The name is covered by a trademark claim; see `get_domain_claim`.
    #[serde(deserialize_with = "null_as_default")]
    pub claim: bool,
    /// The TLD has additional registration requirements.
    #[serde(deserialize_with = "null_as_default")]
    pub add_req: bool,
}
zero_timestamps!(DomainCheck {});

/// Prices for each lifecycle operation, in `currency`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Prices {
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub register: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub renew: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub transfer: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub redeem: f64,
}

/// Registrant, admin, tech, or billing contact.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub org: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub zip: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub country: String,
    /// Phone in `+CC.NUMBER` form.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub extras: Vec<String>,
}

/// Contact attached to a trademark claim.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClaimContact {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub country_code: String,
}

/// Trademark claim notice for a domain name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Claim {
    #[serde(deserialize_with = "null_as_default")]
    pub trade_mark: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jurisdiction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jurisdiction_country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub goods: String,
    pub registrant_contact: Option<ClaimContact>,
    pub agent_contact: Option<ClaimContact>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: Vec<String>,
}
zero_timestamps!(Claim {});

/// Auto-renew flag of a domain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AutoRenew {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub auto_renew: bool,
}
zero_timestamps!(AutoRenew {});

/// Result of a renewal.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Renew {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    pub new_expiration_date: Option<Timestamp>,
}
zero_timestamps!(Renew { new_expiration_date });

/// Result of a redemption; same shape as a renewal.
pub type Redeem = Renew;
