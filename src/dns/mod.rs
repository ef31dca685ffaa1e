//! Typed DNS record fetching over an injected resolver seam.
//!
//! [`LookupRecords`] is implemented for the synchronous trust-dns
//! [`Resolver`] and for deterministic stubs in tests. The free functions
//! [`fetch_records`] and [`fetch_ptr`] degrade any lookup failure to an empty
//! result: this subsystem reports posture, it never aborts on a flaky query.

mod resolver;
mod types;

pub use resolver::LookupRecords;
pub use types::{RecordData, RecordType};

use std::net::IpAddr;

use thiserror::Error;
use trust_dns_resolver::Resolver;

#[derive(Debug, Error)]
#[error("resolver initialization failed: {source}")]
pub struct ResolverInitError {
    #[source]
    source: std::io::Error,
}

/// Build the system resolver.
pub fn system_resolver() -> Result<Resolver, ResolverInitError> {
    Resolver::from_system_conf().map_err(|source| ResolverInitError { source })
}

/// Fetch all records of one type for `name`. Failures count as "no records".
pub fn fetch_records<R>(resolver: &R, name: &str, record_type: RecordType) -> Vec<RecordData>
where
    R: LookupRecords,
{
    match resolver.lookup(name, record_type) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!("{record_type:?} lookup failed for {name}, treating as empty: {err}");
            Vec::new()
        }
    }
}

/// Reverse lookup for `ip`. Failures count as "no PTR names".
pub fn fetch_ptr<R>(resolver: &R, ip: IpAddr) -> Vec<String>
where
    R: LookupRecords,
{
    match resolver.reverse_lookup(ip) {
        Ok(names) => names,
        Err(err) => {
            tracing::debug!("reverse lookup failed for {ip}, treating as empty: {err}");
            Vec::new()
        }
    }
}
