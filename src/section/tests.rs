use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::checks::tests::StubResolver;
use crate::dns::{RecordData, RecordType};
use crate::suffix::SuffixSet;

use super::build_section_with_resolver;

fn populated_stub() -> StubResolver {
    let mut stub = StubResolver::new();
    stub.insert_txt(
        "example.com",
        ["verification=abc", "v=spf1 ip4:192.0.2.1 ~all"],
    );
    stub.insert(
        "example.com",
        RecordType::Mx,
        vec![RecordData::Mx {
            priority: 10,
            target: "mail.example.com".to_string(),
        }],
    );
    stub.insert(
        "example.com",
        RecordType::A,
        vec![RecordData::A {
            ip: Ipv4Addr::new(192, 0, 2, 1),
            ttl: Some(300),
        }],
    );
    stub.insert(
        "example.com",
        RecordType::Aaaa,
        vec![RecordData::Aaaa {
            ip: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1),
            ttl: Some(300),
        }],
    );
    stub.insert(
        "example.com",
        RecordType::Ns,
        vec![
            RecordData::Ns {
                target: "ns1.example.net".to_string(),
            },
            RecordData::Ns {
                target: "ns2.example.net".to_string(),
            },
        ],
    );
    stub.insert_txt("_dmarc.example.com", ["v=DMARC1; p=reject"]);
    stub.insert(
        "example.com",
        RecordType::Soa,
        vec![RecordData::Soa {
            mname: "ns1.example.net".to_string(),
            rname: "hostmaster.example.com".to_string(),
        }],
    );
    stub.insert_ptr(
        IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
        vec!["web.example.com".to_string()],
    );
    stub
}

#[test]
fn fields_appear_in_fixed_order() {
    let stub = populated_stub();
    let suffixes = SuffixSet::for_tests(&["com"]);

    let section = build_section_with_resolver(&stub, "www.example.com", &suffixes);
    assert_eq!(section.label, "DNS Settings");
    assert_eq!(
        section.keys().collect::<Vec<_>>(),
        ["spf", "mx", "a", "aaaa", "ns", "dmarc", "ptr", "cname", "soa"]
    );
}

#[test]
fn records_are_reported_for_the_root_domain() {
    let stub = populated_stub();
    let suffixes = SuffixSet::for_tests(&["com"]);

    // Subdomain input; every value below was published on example.com.
    let section = build_section_with_resolver(&stub, "https://www.example.com/", &suffixes);
    assert_eq!(
        section.get("spf").map(|f| f.value.as_str()),
        Some("v=spf1 ip4:192.0.2.1 ~all")
    );
    assert_eq!(
        section.get("mx").map(|f| f.value.as_str()),
        Some("Priority: 10, Host: mail.example.com")
    );
    assert_eq!(
        section.get("ns").map(|f| f.value.as_str()),
        Some("Name Server: ns1.example.net | Name Server: ns2.example.net")
    );
    assert_eq!(
        section.get("dmarc").map(|f| f.value.as_str()),
        Some("v=DMARC1; p=reject")
    );
    assert_eq!(
        section.get("ptr").map(|f| f.value.as_str()),
        Some("web.example.com")
    );
    assert_eq!(
        section.get("cname").map(|f| f.value.as_str()),
        Some("No CNAME records found")
    );
}

#[test]
fn ptr_is_skipped_without_an_a_record() {
    let stub = StubResolver::new();
    let suffixes = SuffixSet::for_tests(&["com"]);

    let section = build_section_with_resolver(&stub, "example.com", &suffixes);
    assert_eq!(
        section.get("ptr").map(|f| f.value.as_str()),
        Some("PTR lookup skipped (no A record)")
    );
    assert_eq!(
        section.get("spf").map(|f| f.value.as_str()),
        Some("No SPF record found")
    );
}

#[test]
fn local_install_gets_a_single_field() {
    let stub = StubResolver::new();
    let suffixes = SuffixSet::for_tests(&["com"]);

    let section = build_section_with_resolver(&stub, "127.0.0.1", &suffixes);
    assert_eq!(section.keys().collect::<Vec<_>>(), ["local"]);
}

#[test]
fn unresolvable_root_domain_is_reported_distinctly() {
    let stub = StubResolver::new();
    let suffixes = SuffixSet::for_tests(&["com"]);

    let section = build_section_with_resolver(&stub, "example.invalid", &suffixes);
    assert_eq!(section.keys().collect::<Vec<_>>(), ["domain"]);
    assert!(
        section
            .get("domain")
            .is_some_and(|f| f.value.contains("public suffix list"))
    );

    // Not the same field the local case produces.
    let section = build_section_with_resolver(&stub, "", &suffixes);
    assert_eq!(section.keys().collect::<Vec<_>>(), ["domain"]);
}
