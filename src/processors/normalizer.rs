use crate::models::{CellValue, NormalizedRowData, ProcessedRowData};
use crate::utils::text::parse_leading_int;

/// Coerces the three extracted fields. Each coercion runs exactly once;
/// values that cannot be coerced come back as `None` for validation to reject.
pub fn normalize_row_data(data: &ProcessedRowData) -> NormalizedRowData {
    NormalizedRowData {
        seniority: normalize_seniority(&data.seniority),
        years_of_experience: normalize_years_of_experience(&data.years_of_experience),
        availability: normalize_availability(&data.availability),
    }
}

/// Trimmed, lowercased text of the cell. Numbers and booleans use their text form.
pub fn normalize_seniority(value: &CellValue) -> String {
    value.to_text().trim().to_lowercase()
}

/// Numbers must be finite whole values; text is read as a leading integer.
pub fn normalize_years_of_experience(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
        CellValue::Number(_) => None,
        CellValue::Text(text) => parse_leading_int(text),
        CellValue::Bool(_) | CellValue::Empty => None,
    }
}

/// Booleans pass through; text must be "true" or "false" (any case, trimmed).
pub fn normalize_availability(value: &CellValue) -> Option<bool> {
    match value {
        CellValue::Bool(b) => Some(*b),
        CellValue::Text(text) => match text.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        CellValue::Number(_) | CellValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_seniority() {
        assert_eq!(normalize_seniority(&"Senior ".into()), "senior");
        assert_eq!(normalize_seniority(&"  JUNIOR".into()), "junior");
        assert_eq!(normalize_seniority(&CellValue::Empty), "");
    }

    #[test]
    fn test_normalize_years_of_experience() {
        assert_eq!(normalize_years_of_experience(&CellValue::Number(7.0)), Some(7));
        assert_eq!(normalize_years_of_experience(&"7".into()), Some(7));
        assert_eq!(normalize_years_of_experience(&"  4  ".into()), Some(4));
        assert_eq!(normalize_years_of_experience(&"invalid".into()), None);
        assert_eq!(normalize_years_of_experience(&CellValue::Number(-1.0)), Some(-1));
        assert_eq!(normalize_years_of_experience(&CellValue::Number(2.5)), None);
        assert_eq!(normalize_years_of_experience(&CellValue::Number(f64::NAN)), None);
        assert_eq!(normalize_years_of_experience(&CellValue::Bool(true)), None);
    }

    #[test]
    fn test_normalize_availability_single_pass() {
        assert_eq!(normalize_availability(&CellValue::Bool(true)), Some(true));
        assert_eq!(normalize_availability(&CellValue::Bool(false)), Some(false));
        assert_eq!(normalize_availability(&"TRUE".into()), Some(true));
        assert_eq!(normalize_availability(&" false ".into()), Some(false));
        // "false" must never turn into true
        assert_eq!(normalize_availability(&"false".into()), Some(false));
        assert_eq!(normalize_availability(&"maybe".into()), None);
        assert_eq!(normalize_availability(&"1".into()), None);
        assert_eq!(normalize_availability(&"".into()), None);
        assert_eq!(normalize_availability(&CellValue::Number(1.0)), None);
    }

    #[test]
    fn test_normalize_row_data() {
        let data = ProcessedRowData {
            seniority: " Junior".into(),
            years_of_experience: "3".into(),
            availability: "True".into(),
        };
        let normalized = normalize_row_data(&data);
        assert_eq!(normalized.seniority, "junior");
        assert_eq!(normalized.years_of_experience, Some(3));
        assert_eq!(normalized.availability, Some(true));
    }
}
