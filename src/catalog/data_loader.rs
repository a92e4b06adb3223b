use csv::ReaderBuilder;
use crate::models::IngredientRecord;

// Column positions in the published sheet: name,calories,proteins,fats,carbs
const NAME_COL: usize = 0;
const CALORIES_COL: usize = 1;
const PROTEINS_COL: usize = 2;
const FATS_COL: usize = 3;
const CARBS_COL: usize = 4;

/// Longest leading decimal number in `s` after leading whitespace, e.g. `"12g"` -> `12`.
/// Trailing text such as units is ignored.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Lenient numeric field: the leading number wins, and no number (or a non-finite one) is 0.
fn parse_nutrient(field: Option<&str>) -> f64 {
    field
        .and_then(leading_number)
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(0.0)
}

/// Parses the published ingredient CSV.
///
/// The first line is always a header and is dropped without inspection. Every other line is
/// split on bare commas (no quote handling, so a name containing a comma shifts its row).
/// Rows whose trimmed name is empty are skipped; duplicates are kept in source order.
pub fn parse_ingredient_csv(csv_text: &str) -> Result<Vec<IngredientRecord>, csv::Error> {
    let body = match csv_text.split_once('\n') {
        Some((_header, rest)) => rest,
        None => "",
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut ingredients = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let name = record.get(NAME_COL).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        ingredients.push(IngredientRecord {
            name: name.to_string(),
            calories: parse_nutrient(record.get(CALORIES_COL)),
            proteins: parse_nutrient(record.get(PROTEINS_COL)),
            fats: parse_nutrient(record.get(FATS_COL)),
            carbs: parse_nutrient(record.get(CARBS_COL)),
        });
    }

    Ok(ingredients)
}
