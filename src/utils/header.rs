/// Normalizes a header cell for comparison (trim, lowercase)
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether every required name appears among the headers.
/// Order-independent; extra headers are ignored.
pub fn contains_all_headers(headers: &[String], required: &[String]) -> bool {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    required
        .iter()
        .map(|name| normalize_header(name))
        .all(|name| normalized.contains(&name))
}

/// Column index of a required header. With duplicate headers the rightmost wins.
pub fn header_index(headers: &[String], name: &str) -> Option<usize> {
    let target = normalize_header(name);
    headers
        .iter()
        .rposition(|header| normalize_header(header) == target)
}
