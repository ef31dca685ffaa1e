//! Debug-information section: a labeled, ordered table of the DNS settings
//! for the root domain of the configured site address.

mod types;

pub use types::{DebugField, DebugSection};

use std::net::IpAddr;
use std::path::Path;

use crate::checks::first_matching_txt;
use crate::dns::{
    LookupRecords, RecordData, RecordType, ResolverInitError, fetch_ptr, fetch_records,
    system_resolver,
};
use crate::host::{SiteHost, site_host};
use crate::suffix::{SuffixSet, load_suffix_list, root_domain};

/// Build the section for a site address using the system resolver.
pub fn build_debug_section(
    site_url: &str,
    cache_dir: &Path,
) -> Result<DebugSection, ResolverInitError> {
    let resolver = system_resolver()?;
    let suffixes = load_suffix_list(cache_dir);
    Ok(build_section_with_resolver(&resolver, site_url, &suffixes))
}

/// Build the section over an injected resolver and suffix set.
pub fn build_section_with_resolver<R>(
    resolver: &R,
    site_url: &str,
    suffixes: &SuffixSet,
) -> DebugSection
where
    R: LookupRecords,
{
    let mut section = DebugSection::new("DNS Settings");

    let domain = match site_host(site_url) {
        None => {
            section.push(
                "domain",
                "Domain resolution failed",
                "The site host could not be determined from the configured site address.",
            );
            return section;
        }
        Some(SiteHost::Local(_)) => {
            section.push(
                "local",
                "Localhost install detected",
                "This section only works with a valid domain.",
            );
            return section;
        }
        Some(SiteHost::Domain(domain)) => domain,
    };

    // All records are reported for the registrable root domain, not the
    // (possibly sub-)domain the site runs on.
    let root = root_domain(&domain, suffixes);
    if root.is_empty() {
        section.push(
            "domain",
            "Domain resolution failed",
            "The root domain could not be determined from the public suffix list.",
        );
        return section;
    }

    let txt = fetch_records(resolver, &root, RecordType::Txt);
    let mx = fetch_records(resolver, &root, RecordType::Mx);
    let a = fetch_records(resolver, &root, RecordType::A);
    let aaaa = fetch_records(resolver, &root, RecordType::Aaaa);
    let ns = fetch_records(resolver, &root, RecordType::Ns);
    let dmarc = fetch_records(resolver, &format!("_dmarc.{root}"), RecordType::Txt);
    let cname = fetch_records(resolver, &root, RecordType::Cname);
    let soa = fetch_records(resolver, &root, RecordType::Soa);

    section.push(
        "spf",
        "SPF Record",
        first_matching_txt(&txt, "v=spf1").unwrap_or("No SPF record found"),
    );
    section.push("mx", "MX Records", joined(&mx, "No MX records found"));
    section.push("a", "A Record", joined(&a, "No A records found"));
    section.push("aaaa", "AAAA Record", joined(&aaaa, "No AAAA records found"));
    section.push("ns", "NS Records", joined(&ns, "No NS records found"));
    section.push(
        "dmarc",
        "DMARC Record",
        first_matching_txt(&dmarc, "v=DMARC1").unwrap_or("No DMARC record found"),
    );
    section.push("ptr", "PTR Record", ptr_value(resolver, &a));
    section.push(
        "cname",
        "CNAME Records",
        joined(&cname, "No CNAME records found"),
    );
    section.push("soa", "SOA Records", joined(&soa, "No SOA records found"));
    section
}

/// Reverse lookup of the first A record. Skipped entirely when no usable
/// IPv4 address was found.
fn ptr_value<R>(resolver: &R, a_records: &[RecordData]) -> String
where
    R: LookupRecords,
{
    let Some(ip) = first_a_ip(a_records) else {
        return "PTR lookup skipped (no A record)".to_string();
    };
    let names = fetch_ptr(resolver, IpAddr::V4(ip));
    if names.is_empty() {
        "No PTR record found".to_string()
    } else {
        names.join(" | ")
    }
}

fn first_a_ip(records: &[RecordData]) -> Option<std::net::Ipv4Addr> {
    records.iter().find_map(|record| match record {
        RecordData::A { ip, .. } => Some(*ip),
        _ => None,
    })
}

fn joined(records: &[RecordData], fallback: &str) -> String {
    if records.is_empty() {
        fallback.to_string()
    } else {
        records
            .iter()
            .map(RecordData::display_value)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests;
