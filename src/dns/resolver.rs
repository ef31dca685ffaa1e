use std::net::IpAddr;

use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::Lookup,
    proto::rr::{RData, Record, RecordType as ProtoRecordType},
};

use super::types::{RecordData, RecordType};

/// Resolver seam: the system resolver in production, a deterministic stub in
/// tests.
pub trait LookupRecords {
    fn lookup(&self, name: &str, record_type: RecordType)
    -> Result<Vec<RecordData>, ResolveError>;

    fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError>;
}

impl LookupRecords for Resolver {
    fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<RecordData>, ResolveError> {
        let lookup = match Resolver::lookup(self, name, proto_type(record_type)) {
            Ok(lookup) => lookup,
            Err(err) => {
                if should_treat_as_empty(&err) {
                    return Ok(Vec::new());
                }
                return Err(err);
            }
        };
        Ok(collect_records(&lookup, record_type))
    }

    fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError> {
        let lookup = match Resolver::reverse_lookup(self, ip) {
            Ok(lookup) => lookup,
            Err(err) => {
                if should_treat_as_empty(&err) {
                    return Ok(Vec::new());
                }
                return Err(err);
            }
        };
        Ok(lookup
            .iter()
            .map(|ptr| normalize_name(ptr.0.to_utf8()))
            .collect())
    }
}

fn collect_records(lookup: &Lookup, wanted: RecordType) -> Vec<RecordData> {
    // The answer section may carry a CNAME chain along with the requested
    // type; keep only what was asked for.
    lookup
        .record_iter()
        .filter_map(convert_record)
        .filter(|data| data.record_type() == wanted)
        .collect()
}

fn convert_record(record: &Record) -> Option<RecordData> {
    let ttl = record.ttl();
    let data = record.data()?;
    Some(match data {
        RData::TXT(txt) => RecordData::Txt {
            text: txt
                .txt_data()
                .iter()
                .map(|piece| String::from_utf8_lossy(piece).into_owned())
                .collect::<Vec<_>>()
                .join(""),
        },
        RData::MX(mx) => RecordData::Mx {
            priority: mx.preference(),
            target: normalize_name(mx.exchange().to_utf8()),
        },
        RData::A(a) => RecordData::A {
            ip: a.0,
            ttl: Some(ttl),
        },
        RData::AAAA(aaaa) => RecordData::Aaaa {
            ip: aaaa.0,
            ttl: Some(ttl),
        },
        RData::NS(ns) => RecordData::Ns {
            target: normalize_name(ns.0.to_utf8()),
        },
        RData::CNAME(cname) => RecordData::Cname {
            target: normalize_name(cname.0.to_utf8()),
        },
        RData::SOA(soa) => RecordData::Soa {
            mname: normalize_name(soa.mname().to_utf8()),
            rname: normalize_name(soa.rname().to_utf8()),
        },
        RData::PTR(ptr) => RecordData::Ptr {
            target: normalize_name(ptr.0.to_utf8()),
        },
        _ => return None,
    })
}

fn proto_type(record_type: RecordType) -> ProtoRecordType {
    match record_type {
        RecordType::Txt => ProtoRecordType::TXT,
        RecordType::Mx => ProtoRecordType::MX,
        RecordType::A => ProtoRecordType::A,
        RecordType::Aaaa => ProtoRecordType::AAAA,
        RecordType::Ns => ProtoRecordType::NS,
        RecordType::Cname => ProtoRecordType::CNAME,
        RecordType::Soa => ProtoRecordType::SOA,
        RecordType::Ptr => ProtoRecordType::PTR,
    }
}

pub(crate) fn normalize_name(name: String) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
