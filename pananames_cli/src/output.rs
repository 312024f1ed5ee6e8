use pananames_api::types::{
    Balance, Contact, Date, Domain, DomainCheck, NameServerRecord, Pagination, Payment, Prices,
    Timestamp, Tld, WhoisInfo,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Transaction")]
    tx_id: String,
    #[tabled(rename = "Type")]
    tx_type: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct DomainRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Lock")]
    lock_status: String,
    #[tabled(rename = "Auto Renew")]
    auto_renew: String,
    #[tabled(rename = "Privacy")]
    whois_privacy: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Premium")]
    premium: String,
    #[tabled(rename = "Register")]
    register: String,
    #[tabled(rename = "Renew")]
    renew: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

#[derive(Tabled)]
struct TldRow {
    #[tabled(rename = "TLD")]
    tld: String,
    #[tabled(rename = "Register")]
    register: String,
    #[tabled(rename = "Renew")]
    renew: String,
    #[tabled(rename = "Transfer")]
    transfer: String,
    #[tabled(rename = "Promo")]
    promo: String,
    #[tabled(rename = "Promo Until")]
    promo_until: String,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Priority")]
    priority: i64,
    #[tabled(rename = "TTL")]
    ttl: i64,
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Organization")]
    org: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Country")]
    country: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_payment_rows(payments: &[Payment]) -> Vec<PaymentRow> {
    payments
        .iter()
        .map(|p| PaymentRow {
            date: format_timestamp(p.tx_date),
            tx_id: p.tx_id.clone(),
            tx_type: p.tx_type.clone(),
            domain: p.domain.clone(),
            period: p.period.clone(),
            total: format!("{:.2}", p.total),
        })
        .collect()
}

fn build_domain_rows(domains: &[Domain]) -> Vec<DomainRow> {
    domains
        .iter()
        .map(|d| DomainRow {
            domain: d.domain.clone(),
            status: d.status.clone(),
            lock_status: d.lock_status.clone(),
            auto_renew: yes_no(d.auto_renew),
            whois_privacy: yes_no(d.whois_privacy),
            expires: format_timestamp(d.expiration_date),
        })
        .collect()
}

fn build_domain_fields(domain: &Domain) -> Vec<FieldRow> {
    let field = |name: &str, value: String| FieldRow {
        field: name.to_string(),
        value,
    };
    let mut rows = vec![
        field("Domain", domain.domain.clone()),
        field("IDN", domain.domain_idn.clone()),
        field("Status", domain.status.clone()),
        field("Lock", domain.lock_status.clone()),
        field("Premium", yes_no(domain.premium)),
        field("Auto Renew", yes_no(domain.auto_renew)),
        field("WHOIS Privacy", yes_no(domain.whois_privacy)),
        field("Registered", format_timestamp(domain.registration_date)),
        field("Expires", format_timestamp(domain.expiration_date)),
        field("Deletion", format_date(domain.deletion_date)),
        field(
            "Name Servers",
            domain
                .name_servers
                .as_ref()
                .map(|ns| ns.join(", "))
                .unwrap_or_else(|| "-".to_string()),
        ),
    ];
    for child in &domain.child_name_servers {
        let addrs: Vec<&str> = [child.ipv4.as_str(), child.ipv6.as_str()]
            .into_iter()
            .filter(|a| !a.is_empty())
            .collect();
        rows.push(field(
            "Child NS",
            format!("{} ({})", child.hostname, addrs.join(", ")),
        ));
    }
    rows
}

fn build_check_rows(checks: &[DomainCheck]) -> Vec<CheckRow> {
    checks
        .iter()
        .map(|c| {
            let mut notes = Vec::new();
            if c.claim {
                notes.push("trademark claim");
            }
            if c.add_req {
                notes.push("extra requirements");
            }
            CheckRow {
                domain: c.domain.clone(),
                available: yes_no(c.available),
                premium: yes_no(c.premium),
                register: format_price(c.prices.as_ref(), |p| p.register),
                renew: format_price(c.prices.as_ref(), |p| p.renew),
                notes: notes.join(", "),
            }
        })
        .collect()
}

fn build_tld_rows(tlds: &[Tld]) -> Vec<TldRow> {
    tlds.iter()
        .map(|t| TldRow {
            tld: t.tld.clone(),
            register: format_price(t.prices.as_ref(), |p| p.register),
            renew: format_price(t.prices.as_ref(), |p| p.renew),
            transfer: format_price(t.prices.as_ref(), |p| p.transfer),
            promo: format_price(t.promo_prices.as_ref(), |p| p.register),
            promo_until: format_timestamp(t.promo_until),
        })
        .collect()
}

fn build_record_rows(records: &[NameServerRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            id: r.id.clone(),
            name: r.name.clone(),
            record_type: r.record_type.clone(),
            value: r.value.clone(),
            priority: r.priority,
            ttl: r.ttl,
        })
        .collect()
}

fn build_contact_rows(whois: &WhoisInfo) -> Vec<ContactRow> {
    [
        ("Registrant", &whois.registrant_contact),
        ("Admin", &whois.admin_contact),
        ("Tech", &whois.tech_contact),
        ("Billing", &whois.billing_contact),
    ]
    .into_iter()
    .filter_map(|(role, contact)| contact.as_ref().map(|c| contact_row(role, c)))
    .collect()
}

fn contact_row(role: &str, c: &Contact) -> ContactRow {
    ContactRow {
        role: role.to_string(),
        name: c.name.clone(),
        org: c.org.clone(),
        email: c.email.clone(),
        phone: c.phone.clone(),
        country: c.country.clone(),
    }
}

// -- Table output --

pub fn print_balance_table(balance: &Balance) {
    let rows = vec![FieldRow {
        field: "Balance".to_string(),
        value: format!("{:.2}", balance.balance),
    }];
    println!("{}", Table::new(rows));
}

pub fn print_payments_table(payments: &[Payment]) {
    println!("{}", Table::new(build_payment_rows(payments)));
}

pub fn print_domains_table(domains: &[Domain]) {
    println!("{}", Table::new(build_domain_rows(domains)));
}

pub fn print_domain_detail(domain: &Domain) {
    let mut table = Table::new(build_domain_fields(domain));
    table.with(Style::modern());
    println!("{}", table);
}

pub fn print_checks_table(checks: &[DomainCheck]) {
    println!("{}", Table::new(build_check_rows(checks)));
}

pub fn print_tlds_table(tlds: &[Tld]) {
    println!("{}", Table::new(build_tld_rows(tlds)));
}

pub fn print_records_table(records: &[NameServerRecord]) {
    println!("{}", Table::new(build_record_rows(records)));
}

pub fn print_whois_table(whois: &WhoisInfo) {
    println!("{}", Table::new(build_contact_rows(whois)));
    if whois.whois_privacy {
        eprintln!("WHOIS privacy is enabled");
    }
}

pub fn print_name_servers(name_servers: &[String]) {
    for ns in name_servers {
        println!("{}", ns);
    }
}

/// Paging goes to stderr so stdout stays parseable.
pub fn print_pagination(pagination: &Pagination) {
    eprintln!(
        "Page {} of {} ({} total)",
        pagination.page, pagination.pages, pagination.total
    );
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn format_timestamp(value: Option<Timestamp>) -> String {
    value
        .map(|t| t.0.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_date(value: Option<Date>) -> String {
    value
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_price(prices: Option<&Prices>, pick: impl Fn(&Prices) -> f64) -> String {
    match prices {
        Some(p) => format!("{:.2} {}", pick(p), p.currency),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pananames_api::types::ZeroTimestamps;
    use serde::de::DeserializeOwned;

    use super::*;

    fn load_fixture<T: DeserializeOwned + ZeroTimestamps>(json_str: &str) -> T {
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        let mut data: T = serde_json::from_value(resp["data"].clone()).unwrap();
        data.clear_zero_timestamps();
        data
    }

    fn domains_fixture() -> Vec<Domain> {
        load_fixture(include_str!("../../pananames_api/tests/fixtures/domains.json"))
    }

    #[test]
    fn domain_rows_show_dash_for_missing_expiry() {
        let rows = build_domain_rows(&domains_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].domain, "test.com");
        assert_eq!(rows[0].expires, "2021-03-14");
        assert_eq!(rows[0].auto_renew, "yes");
        assert_eq!(rows[1].expires, "-");
        assert_eq!(rows[1].whois_privacy, "no");
    }

    #[test]
    fn domain_fields_list_child_name_servers() {
        let domains = domains_fixture();
        let fields = build_domain_fields(&domains[1]);
        let deletion = fields.iter().find(|f| f.field == "Deletion").unwrap();
        assert_eq!(deletion.value, "2020-07-16");
        let ns = fields.iter().find(|f| f.field == "Name Servers").unwrap();
        assert_eq!(ns.value, "-");
        let child = fields.iter().find(|f| f.field == "Child NS").unwrap();
        assert_eq!(child.value, "ns1.expired.xyz (192.0.2.1)");
    }

    #[test]
    fn check_rows_flag_claims_and_missing_prices() {
        let checks: Vec<DomainCheck> = load_fixture(include_str!(
            "../../pananames_api/tests/fixtures/domain_bulk_check.json"
        ));
        let rows = build_check_rows(&checks);
        assert_eq!(rows[0].register, "10.50 USD");
        assert_eq!(rows[0].notes, "");
        assert_eq!(rows[1].available, "no");
        assert_eq!(rows[1].register, "-");
        assert_eq!(rows[1].notes, "trademark claim");
    }

    #[test]
    fn tld_rows_show_promo() {
        let tlds: Vec<Tld> =
            load_fixture(include_str!("../../pananames_api/tests/fixtures/tlds.json"));
        let rows = build_tld_rows(&tlds);
        assert_eq!(rows[0].tld, "xyz");
        assert_eq!(rows[0].promo, "0.99 USD");
        assert_eq!(rows[0].promo_until, "2020-12-31");
        assert_eq!(rows[1].promo, "-");
        assert_eq!(rows[1].promo_until, "-");
    }

    #[test]
    fn payment_rows_format_totals() {
        let payments: Vec<Payment> =
            load_fixture(include_str!("../../pananames_api/tests/fixtures/payments.json"));
        let rows = build_payment_rows(&payments);
        assert_eq!(rows[0].total, "-10.50");
        assert_eq!(rows[0].date, "2020-02-03");
        assert_eq!(rows[1].date, "-");
    }

    #[test]
    fn contact_rows_skip_absent_roles() {
        let whois: WhoisInfo =
            load_fixture(include_str!("../../pananames_api/tests/fixtures/whois.json"));
        let rows = build_contact_rows(&whois);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role, "Registrant");
        assert_eq!(rows[0].org, "Example LLC");
        assert_eq!(rows[1].role, "Admin");
        assert_eq!(rows[1].org, "");
    }

    #[test]
    fn record_rows_keep_wire_type() {
        let records: Vec<NameServerRecord> = load_fixture(include_str!(
            "../../pananames_api/tests/fixtures/name_server_records.json"
        ));
        let rows = build_record_rows(&records);
        assert_eq!(rows[1].record_type, "MX");
        assert_eq!(rows[1].priority, 10);
    }
}
