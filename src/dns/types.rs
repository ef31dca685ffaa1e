use std::net::{Ipv4Addr, Ipv6Addr};

/// Record types this crate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Txt,
    Mx,
    A,
    Aaaa,
    Ns,
    Cname,
    Soa,
    Ptr,
}

/// One resource record, with explicit optional fields where the resolver may
/// not hand them back.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Txt { text: String },
    Mx { priority: u16, target: String },
    A { ip: Ipv4Addr, ttl: Option<u32> },
    Aaaa { ip: Ipv6Addr, ttl: Option<u32> },
    Ns { target: String },
    Cname { target: String },
    Soa { mname: String, rname: String },
    Ptr { target: String },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Txt { .. } => RecordType::Txt,
            Self::Mx { .. } => RecordType::Mx,
            Self::A { .. } => RecordType::A,
            Self::Aaaa { .. } => RecordType::Aaaa,
            Self::Ns { .. } => RecordType::Ns,
            Self::Cname { .. } => RecordType::Cname,
            Self::Soa { .. } => RecordType::Soa,
            Self::Ptr { .. } => RecordType::Ptr,
        }
    }

    /// Human-readable value for debug tables. Absent optional fields render
    /// as `n/a` instead of failing the whole row.
    pub fn display_value(&self) -> String {
        match self {
            Self::Txt { text } => text.clone(),
            Self::Mx { priority, target } => format!("Priority: {priority}, Host: {target}"),
            Self::A { ip, ttl } => format!("IPv4 Address: {ip} (TTL: {})", ttl_or_na(ttl)),
            Self::Aaaa { ip, ttl } => format!("IPv6 Address: {ip} (TTL: {})", ttl_or_na(ttl)),
            Self::Ns { target } => format!("Name Server: {target}"),
            Self::Cname { target } => target.clone(),
            Self::Soa { mname, rname } => format!(
                "Primary Name Server: {mname}, Responsible Email Address: {rname}"
            ),
            Self::Ptr { target } => target.clone(),
        }
    }
}

fn ttl_or_na(ttl: &Option<u32>) -> String {
    match ttl {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    }
}
