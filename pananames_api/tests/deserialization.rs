use pananames_api::types::{
    Domain, DomainCheck, NameServerRecord, Payment, RedirectBulk, Tld, TransferIn, WhoisInfo,
    ZeroTimestamps,
};
use serde::Deserialize;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[derive(Deserialize)]
struct Fixture<T> {
    data: T,
}

fn data<T: for<'de> Deserialize<'de>>(name: &str) -> T {
    let json = load_fixture(name);
    serde_json::from_str::<Fixture<T>>(&json).unwrap().data
}

#[test]
fn deserialize_domains_full() {
    let domains: Vec<Domain> = data("domains.json");
    assert_eq!(domains.len(), 2);

    let domain = &domains[0];
    assert_eq!(domain.domain, "test.com");
    assert!(domain.auto_renew);
    assert_eq!(domain.lock_status, "locked");
    assert_eq!(
        domain.registration_date.unwrap().to_string(),
        "2019-03-14T10:22:31Z"
    );
    // Empty string decodes to the zero date until cleared.
    assert!(domain.deletion_date.unwrap().is_zero());
}

#[test]
fn clearing_zero_timestamps_is_idempotent() {
    let mut domains: Vec<Domain> = data("domains.json");
    domains.clear_zero_timestamps();
    let once = domains.clone();
    domains.clear_zero_timestamps();
    assert_eq!(domains, once);
    assert!(domains[0].deletion_date.is_none());
    assert!(domains[1].expiration_date.is_none());
}

#[test]
fn deserialize_domain_check_without_prices() {
    let checks: Vec<DomainCheck> = data("domain_bulk_check.json");
    assert!(checks[1].prices.is_none());
    assert!(checks[1].promo_multi_years_prices.is_empty());
    assert_eq!(checks[0].prices.as_ref().unwrap().currency, "USD");
}

#[test]
fn deserialize_payments_renamed_fields() {
    let payments: Vec<Payment> = data("payments.json");
    assert_eq!(payments[0].tx_id, "tx-1001");
    assert_eq!(payments[0].total, -10.5);
    assert_eq!(payments[1].tx_type, "refill");
    assert!(payments[1].tx_date.unwrap().is_zero());
}

#[test]
fn deserialize_tlds_promo_dates() {
    let mut tlds: Vec<Tld> = data("tlds.json");
    tlds.clear_zero_timestamps();
    assert_eq!(tlds[0].tld, "xyz");
    assert!(tlds[0].promo_until.is_some());
    assert!(tlds[0].promo_two_years_until.is_none());
    assert!(tlds[1].promo_until.is_none());
    assert!(tlds[1].promo_multi_years_prices.is_empty());
}

#[test]
fn deserialize_transfer_and_whois() {
    let transfers: Vec<TransferIn> = data("transfers_in.json");
    assert_eq!(transfers[0].name_servers.as_ref().unwrap().len(), 1);

    let whois: WhoisInfo = data("whois.json");
    let registrant = whois.registrant_contact.unwrap();
    assert_eq!(registrant.city, "Springfield");
    assert!(registrant.extras.is_empty());
    assert!(whois.tech_contact.is_none());
}

#[test]
fn record_type_uses_wire_name() {
    let record: NameServerRecord =
        serde_json::from_str(r#"{"id": "9", "type": "TXT", "value": "v=spf1 -all"}"#).unwrap();
    assert_eq!(record.record_type, "TXT");
    assert_eq!(record.ttl, 0);
    let out = serde_json::to_value(&record).unwrap();
    assert_eq!(out["type"], "TXT");
}

#[test]
fn bulk_redirect_result_flattens_settings() {
    let bulk: RedirectBulk = serde_json::from_str(
        r#"{
            "url": "https://example.org",
            "masking_enabled": false,
            "domain_list": [
                {"domain": "a.com", "domain_queued": true, "error": ""},
                {"domain": "b.com", "domain_queued": false, "error": "not in account"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(bulk.redirect.url, "https://example.org");
    assert!(bulk.domain_list[0].domain_queued);
    assert_eq!(bulk.domain_list[1].error, "not in account");
}

#[test]
fn null_fields_decode_as_empty_values() {
    let domains: Vec<Domain> = data("domains_nulls.json");
    let domain = &domains[0];
    assert_eq!(domain.domain, "a.com");
    assert_eq!(domain.domain_idn, "");
    assert!(!domain.premium);
    assert_eq!(domain.lock_status, "");
    assert!(domain.child_name_servers.is_empty());
    assert!(domain.name_servers.is_none());
    assert!(domain.expiration_date.is_none());
}

#[test]
fn null_collections_in_nested_models() {
    let tld: Tld = serde_json::from_str(
        r#"{"tld": "xyz", "prices": {"currency": null, "register": null}, "promo_multi_years_prices": null}"#,
    )
    .unwrap();
    assert!(tld.promo_multi_years_prices.is_empty());
    let prices = tld.prices.unwrap();
    assert_eq!(prices.currency, "");
    assert_eq!(prices.register, 0.0);

    let transfer: TransferIn = serde_json::from_str(
        r#"{"domain": "moving.com", "name_server_records": null, "registrant_contact": {"name": null, "extras": null}}"#,
    )
    .unwrap();
    assert!(transfer.name_server_records.is_empty());
    let contact = transfer.registrant_contact.unwrap();
    assert_eq!(contact.name, "");
    assert!(contact.extras.is_empty());

    let bulk: RedirectBulk =
        serde_json::from_str(r#"{"url": null, "masking_enabled": null, "domain_list": null}"#)
            .unwrap();
    assert_eq!(bulk, RedirectBulk::default());

    let whois: WhoisInfo =
        serde_json::from_str(r#"{"whois_privacy": null, "preview": null}"#).unwrap();
    assert_eq!(whois, WhoisInfo::default());
}
