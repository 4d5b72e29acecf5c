use crate::models::ErrorKind;

/// Keyword rules for free-text messages, checked in order; first hit wins.
/// The keywords are the ones the legacy parsers put in their messages.
const KEYWORD_RULES: &[(&str, ErrorKind)] = &[
    ("vacío", ErrorKind::Empty),
    ("columnas", ErrorKind::InvalidColumns),
    ("seniority", ErrorKind::InvalidSeniority),
    ("yearsOfExperience", ErrorKind::InvalidExperience),
    ("availability", ErrorKind::InvalidAvailability),
    ("leer", ErrorKind::ReadError),
    ("fila", ErrorKind::InvalidRows),
    ("coincide", ErrorKind::ColumnMismatch),
];

/// Maps an error message to an error kind.
///
/// A message that embeds a structured key or code (e.g. `"READ_ERROR: candidateForm.errors.fileEmpty"`)
/// resolves to the most specific kind it carries; otherwise the keyword
/// table applies. Unmatched text falls back to [`ErrorKind::ReadError`].
pub fn classify_error_message(message: &str) -> ErrorKind {
    if let Some(kind) = find_embedded_kind(message) {
        return kind;
    }

    KEYWORD_RULES
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::ReadError)
}

fn find_embedded_kind(message: &str) -> Option<ErrorKind> {
    let all = ErrorKind::ALL;
    most_specific(
        all.iter()
            .copied()
            .filter(|kind| message.contains(kind.translation_key())),
    )
    .or_else(|| {
        most_specific(
            all.iter()
                .copied()
                .filter(|kind| contains_code(message, kind.code())),
        )
    })
}

/// READ_ERROR is also the wrapper the legacy parsers put around every
/// failure, so any other kind present is the more specific one.
fn most_specific(mut found: impl Iterator<Item = ErrorKind>) -> Option<ErrorKind> {
    match found.next() {
        Some(ErrorKind::ReadError) => found.next().or(Some(ErrorKind::ReadError)),
        other => other,
    }
}

/// Whole-token match so that `INVALID_ROWS` is not found inside a longer code.
fn contains_code(message: &str, code: &str) -> bool {
    message
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|token| token == code)
}
