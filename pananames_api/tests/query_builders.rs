use pananames_api::types::Contact;
use pananames_api::{
    Client, EnableBulkDomainRedirectOptions, EnableDomainRedirectOptions,
    GetAccountPaymentsOptions, GetEmailsOptions, GetTransfersInOptions, ListOptions, ListQuery,
    Method, RegisterDomainOptions, SetNameServersOptions,
};
use serde::Serialize;
use serde_json::{json, Value};

fn client() -> Client {
    Client::with_base_url("token", "https://example.com").unwrap()
}

fn query_of<O: Serialize>(path: &str, opt: &O) -> String {
    let req = client()
        .new_request(Method::GET, path, Some(opt), &[])
        .unwrap();
    req.url().query().unwrap_or_default().to_string()
}

fn body_of<O: Serialize>(method: Method, path: &str, opt: &O) -> Value {
    let req = client().new_request(method, path, Some(opt), &[]).unwrap();
    let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn list_options_default_to_no_query() {
    assert_eq!(query_of("domains", &ListOptions::default()), "");
}

#[test]
fn payments_query_keeps_required_empty_fields() {
    let opts = GetAccountPaymentsOptions::default()
        .with_id(7)
        .with_pay_type("register")
        .with_domain_like("test")
        .with_limit(50);
    assert_eq!(
        query_of("account/payments", &opts),
        "date_end=&date_from=&domain_like=test&id=7&pay_type=register&per_page=50"
    );
}

#[test]
fn transfers_query_filters() {
    let opts = GetTransfersInOptions::default()
        .with_status("pending")
        .with_domain_like("moving")
        .with_page(3);
    assert_eq!(
        query_of("transfers_in", &opts),
        "current_page=3&domain_like=moving&status=pending"
    );
}

#[test]
fn emails_query_filters() {
    let opts = GetEmailsOptions::default()
        .with_email_like("jane@")
        .with_email_status("verified");
    assert_eq!(
        query_of("emails", &opts),
        "email_like=jane%40&email_status=verified"
    );
}

#[test]
fn register_domain_body_shares_one_contact() {
    let contact = Contact {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        country: "US".to_string(),
        phone: "+1.5555550100".to_string(),
        ..Default::default()
    };
    let opts = RegisterDomainOptions::with_contact("test.xyz", 2, contact);
    let body = body_of(Method::POST, "domains", &opts);

    let expected_contact = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "country": "US",
        "phone": "+1.5555550100"
    });
    assert_eq!(body["domain"], "test.xyz");
    assert_eq!(body["period"], 2);
    assert_eq!(body["whois_privacy"], false);
    assert!(body.get("premium_price").is_none());
    assert!(body.get("claims_accepted").is_none());
    for role in [
        "registrant_contact",
        "admin_contact",
        "tech_contact",
        "billing_contact",
    ] {
        assert_eq!(body[role], expected_contact);
    }
}

#[test]
fn set_name_servers_body() {
    let opts = SetNameServersOptions::new(&["ns1.example.net", "ns2.example.net"]);
    assert_eq!(
        body_of(Method::PUT, "domains/test.com/name_servers", &opts),
        json!({"name_servers": ["ns1.example.net", "ns2.example.net"]})
    );
}

#[test]
fn bulk_redirect_body_is_flat() {
    let opts = EnableBulkDomainRedirectOptions {
        redirect: EnableDomainRedirectOptions {
            url: "https://example.org".to_string(),
            masking_enabled: true,
            masking_title: "Example".to_string(),
            ..Default::default()
        },
        domain_list: vec!["a.com".to_string(), "b.com".to_string()],
    };
    assert_eq!(
        body_of(Method::PUT, "domains/bulk_redirect", &opts),
        json!({
            "url": "https://example.org",
            "masking_enabled": true,
            "masking_title": "Example",
            "domain_list": ["a.com", "b.com"]
        })
    );
}

#[test]
fn path_is_joined_under_api_prefix() {
    let req = client()
        .new_request(Method::GET, "tlds/xyz/add_req", None::<&()>, &[])
        .unwrap();
    assert_eq!(
        req.url().as_str(),
        "https://example.com/merchant/v2/tlds/xyz/add_req"
    );
}
