use std::collections::HashMap;
use std::net::IpAddr;

use trust_dns_resolver::error::ResolveError;

use crate::dns::{LookupRecords, RecordData, RecordType};
use crate::suffix::SuffixSet;

use super::{CheckKind, CheckStatus, check_with_resolver, first_matching_txt};

pub(crate) struct StubResolver {
    records: HashMap<(String, RecordType), Vec<RecordData>>,
    ptr: HashMap<IpAddr, Vec<String>>,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self {
            records: HashMap::new(),
            ptr: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &str, record_type: RecordType, records: Vec<RecordData>) {
        self.records
            .insert((normalize_name(name), record_type), records);
    }

    pub(crate) fn insert_txt<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = values
            .into_iter()
            .map(|value| RecordData::Txt { text: value.into() })
            .collect();
        self.insert(name, RecordType::Txt, records);
    }

    pub(crate) fn insert_ptr(&mut self, ip: IpAddr, names: Vec<String>) {
        self.ptr.insert(ip, names);
    }
}

impl LookupRecords for StubResolver {
    fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<RecordData>, ResolveError> {
        let key = (normalize_name(name), record_type);
        Ok(self.records.get(&key).cloned().unwrap_or_default())
    }

    fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError> {
        Ok(self.ptr.get(&ip).cloned().unwrap_or_default())
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[test]
fn first_matching_txt_returns_the_first_value_verbatim() {
    let records = vec![
        RecordData::Txt {
            text: "v=spf1 include:_spf.example.com ~all".to_string(),
        },
        RecordData::Txt {
            text: "other".to_string(),
        },
    ];
    assert_eq!(
        first_matching_txt(&records, "v=spf1"),
        Some("v=spf1 include:_spf.example.com ~all")
    );
}

#[test]
fn first_matching_txt_handles_empty_input() {
    assert_eq!(first_matching_txt(&[], "v=spf1"), None);
}

#[test]
fn first_matching_txt_skips_other_record_types() {
    let records = vec![
        RecordData::Mx {
            priority: 10,
            target: "mail.example.com".to_string(),
        },
        RecordData::Txt {
            text: "verification=abc".to_string(),
        },
        RecordData::Txt {
            text: "v=DMARC1; p=none".to_string(),
        },
    ];
    assert_eq!(
        first_matching_txt(&records, "v=DMARC1"),
        Some("v=DMARC1; p=none")
    );
}

#[test]
fn spf_on_the_site_host_is_good() {
    let mut stub = StubResolver::new();
    stub.insert_txt("example.com", ["v=spf1 ip4:192.0.2.1 ~all"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Spf, "example.com", &suffixes);
    assert_eq!(result.status, CheckStatus::Good);
    assert_eq!(result.test, "spf_record");
    assert!(result.actions.contains("example.com"));
    assert!(result.actions.contains("v=spf1 ip4:192.0.2.1 ~all"));
}

#[test]
fn spf_missing_on_subdomain_reports_the_root_record() {
    let mut stub = StubResolver::new();
    stub.insert_txt("example.com", ["v=spf1 include:_spf.example.com ~all"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Spf, "mail.example.com", &suffixes);
    assert_eq!(result.status, CheckStatus::Recommended);
    assert_eq!(
        result.label,
        "SPF record missing on site host (root domain record found)"
    );
    assert!(result.actions.contains("mail.example.com"));
    assert!(result.actions.contains("Checked root domain:"));
    assert!(
        result
            .actions
            .contains("v=spf1 include:_spf.example.com ~all")
    );
    assert!(result.description.contains("does not automatically inherit"));
}

#[test]
fn dmarc_lookups_use_the_underscore_label() {
    let mut stub = StubResolver::new();
    stub.insert_txt("_dmarc.mail.example.com", ["v=DMARC1; p=reject"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Dmarc, "mail.example.com", &suffixes);
    assert_eq!(result.status, CheckStatus::Good);
    assert!(result.actions.contains("v=DMARC1; p=reject"));
}

#[test]
fn dmarc_root_fallback_mentions_policy_dependence() {
    let mut stub = StubResolver::new();
    stub.insert_txt("_dmarc.example.com", ["v=DMARC1; p=none"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Dmarc, "www.example.com", &suffixes);
    assert_eq!(result.status, CheckStatus::Recommended);
    assert!(result.description.contains("depending on policy"));
    assert!(result.actions.contains("v=DMARC1; p=none"));
}

#[test]
fn missing_everywhere_does_not_imply_a_root_fallback() {
    let stub = StubResolver::new();
    let suffixes = SuffixSet::for_tests(&["com"]);

    // Host equals the root domain, so no root fallback was even possible.
    let result = check_with_resolver(&stub, CheckKind::Spf, "example.com", &suffixes);
    assert_eq!(result.status, CheckStatus::Recommended);
    assert_eq!(
        result.label,
        "SPF record not found on site host or root domain"
    );
    assert!(!result.actions.contains("Checked root domain:"));
}

#[test]
fn undeterminable_host_is_reported() {
    let stub = StubResolver::new();
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Spf, "", &suffixes);
    assert_eq!(result.status, CheckStatus::Recommended);
    assert!(result.label.contains("could not determine the site host"));
}

#[test]
fn local_install_short_circuits_without_lookups() {
    let mut stub = StubResolver::new();
    // Even with a record published under "localhost" the check must not
    // consult DNS.
    stub.insert_txt("localhost", ["v=spf1 -all"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let result = check_with_resolver(&stub, CheckKind::Spf, "localhost", &suffixes);
    assert_eq!(result.status, CheckStatus::Good);
    assert!(result.label.contains("local install"));
    assert!(!result.actions.contains("v=spf1"));
}

#[test]
fn evaluation_is_idempotent() {
    let mut stub = StubResolver::new();
    stub.insert_txt("example.com", ["v=spf1 include:_spf.example.com ~all"]);
    let suffixes = SuffixSet::for_tests(&["com"]);

    let first = check_with_resolver(&stub, CheckKind::Spf, "mail.example.com", &suffixes);
    let second = check_with_resolver(&stub, CheckKind::Spf, "mail.example.com", &suffixes);
    assert_eq!(first, second);
}
