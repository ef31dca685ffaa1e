use crate::dns::{LookupRecords, RecordType, fetch_records};
use crate::host::SiteHost;
use crate::suffix::{SuffixSet, root_domain};

use super::select::first_matching_txt;
use super::types::{Badge, CheckKind, CheckResult, CheckStatus};

/// Ordered decision rules for one check. Each rule is terminal; DNS lookup
/// failure behaves exactly like "record not found".
pub(crate) fn evaluate<R>(
    resolver: &R,
    kind: CheckKind,
    host: Option<&SiteHost>,
    suffixes: &SuffixSet,
) -> CheckResult
where
    R: LookupRecords,
{
    let name = kind.display_name();

    let Some(host) = host else {
        return result(
            kind,
            CheckStatus::Recommended,
            format!("{name} check could not determine the site host"),
            p(&format!(
                "The {name} check could not determine the current site host."
            )),
            String::new(),
        );
    };

    let host = match host {
        SiteHost::Local(local) => {
            return result(
                kind,
                CheckStatus::Good,
                format!("{name} check skipped on a local install"),
                p(&format!(
                    "The {name} check only works with a publicly resolvable domain."
                )),
                code_line("Checked site host:", local),
            );
        }
        SiteHost::Domain(domain) => domain.as_str(),
    };

    let root = root_domain(host, suffixes);
    let is_subdomain = !root.is_empty() && !root.eq_ignore_ascii_case(host);

    let site_record = first_matching_txt(
        &fetch_records(resolver, &kind.lookup_name(host), RecordType::Txt),
        kind.prefix(),
    )
    .map(str::to_string);
    // Only consult the root domain when the site actually sits below it.
    let root_record = if is_subdomain {
        first_matching_txt(
            &fetch_records(resolver, &kind.lookup_name(&root), RecordType::Txt),
            kind.prefix(),
        )
        .map(str::to_string)
    } else {
        None
    };

    let mut actions = code_line("Checked site host:", host);
    if is_subdomain {
        actions.push_str(&code_line("Checked root domain:", &root));
    }

    if let Some(record) = site_record {
        actions.push_str(&code_line(&format!("Site host {name}:"), &record));
        return result(
            kind,
            CheckStatus::Good,
            format!("{name} record is properly configured for the site host"),
            p(&format!(
                "Your site host has {} {name} record, helping to prevent email spoofing.",
                kind.article()
            )),
            actions,
        );
    }

    if let Some(record) = root_record {
        actions.push_str(&code_line(&format!("Root domain {name}:"), &record));
        actions.push_str(&p(kind.fallback_advice()));
        return result(
            kind,
            CheckStatus::Recommended,
            format!("{name} record missing on site host (root domain record found)"),
            p(kind.fallback_description()),
            actions,
        );
    }

    actions.push_str(&p(&format!(
        "Please consult your DNS provider or system administrator to create \
         {} {name} record for your domain.",
        kind.article()
    )));
    result(
        kind,
        CheckStatus::Recommended,
        format!("{name} record not found on site host or root domain"),
        p(&format!(
            "No {name} record was found for the site host, and no fallback record \
             was found on the root domain."
        )),
        actions,
    )
}

fn result(
    kind: CheckKind,
    status: CheckStatus,
    label: String,
    description: String,
    actions: String,
) -> CheckResult {
    CheckResult {
        label,
        status,
        badge: Badge::security(),
        description,
        actions,
        test: kind.test_id().to_string(),
    }
}

fn p(text: &str) -> String {
    format!("<p>{text}</p>")
}

fn code_line(label: &str, value: &str) -> String {
    format!("<p>{label} <code>{value}</code></p>")
}
