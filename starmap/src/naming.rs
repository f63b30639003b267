//! Display name resolution
//!
//! Every star gets exactly one label. Candidates are tried from the most
//! human to the most technical and the first usable one wins:
//!
//! 1. proper name (`Sirius`)
//! 2. Bayer designation (`Alp And`)
//! 3. Flamsteed designation (`21 And`)
//! 4. Gliese number (`Gl 1`)
//! 5. Hipparcos number (`HIP 11767`)
//! 6. Henry Draper number (`HD 224841`)
//! 7. HYG id (`HYG 42`), which always exists
//!
//! Numeric catalog ids are truncated, never rounded. A tier whose value does
//! not parse as a number is logged at debug level and skipped rather than
//! treated as an error.

use crate::catalog::CatalogRow;

/// A catalog row paired with its resolved display name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRow {
    pub name: String,
    pub row: CatalogRow,
}

/// Resolve the best available display name for a catalog row
pub fn display_name(row: &CatalogRow) -> String {
    if let Some(proper) = non_blank(&row.proper) {
        return proper.to_string();
    }
    if let (Some(bayer), Some(con)) = (non_blank(&row.bayer), non_blank(&row.con)) {
        return format!("{bayer} {con}");
    }
    if let (Some(flam), Some(con)) = (catalog_number(row.id, "flam", &row.flam), non_blank(&row.con)) {
        return format!("{flam} {con}");
    }
    if let Some(gl) = non_blank(&row.gl) {
        return format!("Gl {gl}");
    }
    if let Some(hip) = catalog_number(row.id, "hip", &row.hip) {
        return format!("HIP {hip}");
    }
    if let Some(hd) = catalog_number(row.id, "hd", &row.hd) {
        return format!("HD {hd}");
    }
    format!("HYG {}", row.id)
}

/// Attach a display name to every row
pub fn resolve_names(rows: Vec<CatalogRow>) -> Vec<NamedRow> {
    rows.into_iter()
        .map(|row| NamedRow {
            name: display_name(&row),
            row,
        })
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Interpret a textual catalog number, truncating any fractional part.
///
/// HYG stores these columns as floats when they come from a float-typed
/// export (`11767.0`), so the value is parsed as `f64` first.
fn catalog_number(id: i64, tier: &str, value: &Option<String>) -> Option<i64> {
    let raw = non_blank(value)?;
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number.trunc() as i64),
        _ => {
            log::debug!("HYG {id}: {tier} value '{raw}' is not numeric, falling through");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn row(id: i64) -> CatalogRow {
        CatalogRow {
            id,
            ..Default::default()
        }
    }

    #[test]
    fn test_proper_name_wins_over_everything() {
        let row = CatalogRow {
            proper: text("  Sirius "),
            bayer: text("Alp"),
            flam: text("9"),
            con: text("CMa"),
            gl: text("244A"),
            hip: text("32349"),
            hd: text("48915"),
            ..row(32263)
        };
        assert_eq!(display_name(&row), "Sirius");
    }

    #[test]
    fn test_bayer_designation_is_trimmed() {
        let row = CatalogRow {
            bayer: text(" Alp "),
            con: text("And"),
            flam: text("21"),
            ..row(677)
        };
        assert_eq!(display_name(&row), "Alp And");
    }

    #[test]
    fn test_bayer_without_constellation_falls_through() {
        let row = CatalogRow {
            bayer: text("Alp"),
            hip: text("677"),
            ..row(1)
        };
        assert_eq!(display_name(&row), "HIP 677");
    }

    #[rstest]
    #[case(text("21"), "21 And")]
    #[case(text("21.9"), "21 And")]
    #[case(text(" 7 "), "7 And")]
    fn test_flamsteed_number_is_truncated(#[case] flam: Option<String>, #[case] expected: &str) {
        let row = CatalogRow {
            flam,
            con: text("And"),
            ..row(5)
        };
        assert_eq!(display_name(&row), expected);
    }

    #[rstest]
    #[case(text("x"))]
    #[case(text("NaN"))]
    #[case(text("   "))]
    fn test_unusable_flamsteed_falls_through(#[case] flam: Option<String>) {
        let row = CatalogRow {
            flam,
            con: text("And"),
            gl: text("Gl 15A"),
            ..row(5)
        };
        assert_eq!(display_name(&row), "Gl Gl 15A");
    }

    #[test]
    fn test_blank_proper_is_skipped() {
        let row = CatalogRow {
            proper: text("   "),
            gl: text(" 551 "),
            ..row(70890)
        };
        assert_eq!(display_name(&row), "Gl 551");
    }

    #[rstest]
    #[case(text("11767"), None, "HIP 11767")]
    #[case(text("11767.0"), text("8890"), "HIP 11767")]
    #[case(None, text("224841.7"), "HD 224841")]
    #[case(text("n/a"), text("224841"), "HD 224841")]
    #[case(None, None, "HYG 118218")]
    #[case(text("?"), text("?"), "HYG 118218")]
    fn test_catalog_number_tiers(
        #[case] hip: Option<String>,
        #[case] hd: Option<String>,
        #[case] expected: &str,
    ) {
        let row = CatalogRow {
            hip,
            hd,
            ..row(118218)
        };
        assert_eq!(display_name(&row), expected);
    }

    #[test]
    fn test_negative_number_truncates_toward_zero() {
        assert_eq!(catalog_number(1, "hip", &text("-3.7")), Some(-3));
    }

    #[rstest]
    #[case(text("n/a"))]
    #[case(text("inf"))]
    #[case(text("12 345"))]
    fn test_non_numeric_catalog_number_is_rejected(#[case] value: Option<String>) {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(catalog_number(42, "hd", &value), None);
    }

    #[test]
    fn test_blank_catalog_number_is_absent() {
        assert_eq!(catalog_number(42, "hd", &None), None);
        assert_eq!(catalog_number(42, "hd", &text("  ")), None);
    }

    #[test]
    fn test_resolve_names_keeps_rows() {
        let rows = vec![
            CatalogRow {
                proper: text("Vega"),
                ..row(91262)
            },
            row(3),
        ];
        let named = resolve_names(rows.clone());

        assert_eq!(named.len(), 2);
        assert_eq!(named[0].name, "Vega");
        assert_eq!(named[1].name, "HYG 3");
        assert_eq!(named[1].row, rows[1]);
    }
}
