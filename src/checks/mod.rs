//! SPF and DMARC presence checks with root-domain fallback reasoning.
//!
//! A check looks for the record on the configured site host first. When the
//! host is a subdomain and has no record of its own, the registrable root
//! domain is consulted: a record there is reported as advisory evidence, not
//! as a pass, since SPF does not inherit to subdomains and DMARC inheritance
//! depends on the published policy.

mod policy;
mod select;
mod types;

pub use select::first_matching_txt;
pub use types::{Badge, CheckKind, CheckResult, CheckStatus};

use std::path::Path;

use crate::dns::{LookupRecords, ResolverInitError, system_resolver};
use crate::host::site_host;
use crate::suffix::{SuffixSet, load_suffix_list};

/// Run the SPF check for a site address using the system resolver.
pub fn check_spf(site_url: &str, cache_dir: &Path) -> Result<CheckResult, ResolverInitError> {
    run(CheckKind::Spf, site_url, cache_dir)
}

/// Run the DMARC check for a site address using the system resolver.
pub fn check_dmarc(site_url: &str, cache_dir: &Path) -> Result<CheckResult, ResolverInitError> {
    run(CheckKind::Dmarc, site_url, cache_dir)
}

fn run(kind: CheckKind, site_url: &str, cache_dir: &Path) -> Result<CheckResult, ResolverInitError> {
    let resolver = system_resolver()?;
    let suffixes = load_suffix_list(cache_dir);
    Ok(check_with_resolver(&resolver, kind, site_url, &suffixes))
}

/// Same check over an injected resolver and suffix set.
pub fn check_with_resolver<R>(
    resolver: &R,
    kind: CheckKind,
    site_url: &str,
    suffixes: &SuffixSet,
) -> CheckResult
where
    R: LookupRecords,
{
    let host = site_host(site_url);
    policy::evaluate(resolver, kind, host.as_ref(), suffixes)
}

#[cfg(test)]
pub(crate) mod tests;
