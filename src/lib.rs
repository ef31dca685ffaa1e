#![forbid(unsafe_code)]
//! dnsposture_lib — DNS and email-authentication posture for a site host.
//!
//! Given a configured site address (bare hostname or URL), this crate derives
//! the registrable root domain via a locally cached public suffix list, runs
//! SPF/DMARC presence checks with root-domain fallback reasoning, and builds
//! a debug table of the domain's DNS records (MX, A/AAAA, NS, CNAME, SOA,
//! PTR). Every network failure degrades to a displayable result; nothing
//! here aborts a surrounding health-check pass.

pub mod checks;
pub mod dns;
pub mod host;
pub mod section;
pub mod suffix;

pub use checks::{
    Badge, CheckKind, CheckResult, CheckStatus, check_dmarc, check_spf, check_with_resolver,
    first_matching_txt,
};
pub use dns::{
    LookupRecords, RecordData, RecordType, ResolverInitError, fetch_ptr, fetch_records,
    system_resolver,
};
pub use host::{SiteHost, site_host};
pub use section::{DebugField, DebugSection, build_debug_section, build_section_with_resolver};
pub use suffix::{
    FetchError, FetchSuffixList, HttpSuffixSource, SuffixSet, SuffixStore, load_suffix_list,
    root_domain,
};
