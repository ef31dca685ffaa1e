/// Which email-authentication record a check looks for.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Spf,
    Dmarc,
}

impl CheckKind {
    /// TXT prefix identifying the record.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Spf => "v=spf1",
            Self::Dmarc => "v=DMARC1",
        }
    }

    /// Name to query for `host`: the host itself for SPF, `_dmarc.<host>`
    /// for DMARC.
    pub(crate) fn lookup_name(self, host: &str) -> String {
        match self {
            Self::Spf => host.to_string(),
            Self::Dmarc => format!("_dmarc.{host}"),
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            Self::Spf => "spf_record",
            Self::Dmarc => "dmarc_record",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Self::Spf => "SPF",
            Self::Dmarc => "DMARC",
        }
    }

    pub(crate) fn article(self) -> &'static str {
        match self {
            Self::Spf => "an",
            Self::Dmarc => "a",
        }
    }

    pub(crate) fn fallback_description(self) -> &'static str {
        match self {
            Self::Spf => {
                "The site host has no SPF record. A root-domain SPF record exists, \
                 but SPF does not automatically inherit to subdomains."
            }
            Self::Dmarc => {
                "The site host has no DMARC record. A root-domain DMARC record exists \
                 and may apply to subdomains depending on policy (for example, the \"sp\" tag)."
            }
        }
    }

    pub(crate) fn fallback_advice(self) -> &'static str {
        match self {
            Self::Spf => "Create an SPF record on the site host if this subdomain sends email.",
            Self::Dmarc => {
                "Consider adding a DMARC record on the site host for explicit subdomain policy."
            }
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Good,
    Recommended,
    Critical,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Recommended => "recommended",
            Self::Critical => "critical",
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl Badge {
    pub(crate) fn security() -> Self {
        Self {
            label: "Security".to_string(),
            color: "blue".to_string(),
        }
    }
}

/// Outcome of one check, shaped for a status-check runner: a short label, a
/// tri-state status, an HTML-ish description, and evidence lines (checked
/// names and found records) in `actions`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub label: String,
    pub status: CheckStatus,
    pub badge: Badge,
    pub description: String,
    pub actions: String,
    pub test: String,
}
