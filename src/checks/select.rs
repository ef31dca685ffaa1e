use crate::dns::RecordData;

/// First TXT value starting with `prefix`, scanning in resolver order.
/// Records of other types or without text are skipped.
pub fn first_matching_txt<'a>(records: &'a [RecordData], prefix: &str) -> Option<&'a str> {
    records.iter().find_map(|record| match record {
        RecordData::Txt { text } if starts_with_ignore_ascii_case(text, prefix) => {
            Some(text.as_str())
        }
        _ => None,
    })
}

fn starts_with_ignore_ascii_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
