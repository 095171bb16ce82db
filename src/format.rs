//! Pure value formatters applied while building entities.
//!
//! Every function here maps a raw value from a result row to a display value.
//! No I/O, no state; unparseable input passes through unchanged.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

const ADDRESS_KIND_VOCAB: &str = "https://www.goudatijdmachine.nl/def#";
const OCCUPATION_VOCAB: &str = "https://iisg.amsterdam/resource/hsn/occupation/";
const RIGHTS_VOCAB: &str = "https://samh.nl/auteursrechten#";

lazy_static! {
  static ref DATE_YMD: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
  static ref DATE_DMY: Regex = Regex::new(r"^(\d{2})-(\d{2})-(\d{4})$").unwrap();
  static ref LOCATION_POINT: Regex = Regex::new(r"Locatiepunt L[0-9]+,").unwrap();
  static ref ADDRESS_ENTRY: Regex = Regex::new(r"^(.*?)\s*\((\d{4})-(\d*)\)").unwrap();
  static ref WARD_SUFFIX: Regex = Regex::new(r"(?i)[,/]\s*wijk\s.*$").unwrap();
  static ref WARD_INFIX: Regex = Regex::new(r", wijk.*? \(").unwrap();
  static ref YEAR_RANGE: Regex = Regex::new(r"\s*\([0-9]{4}-[0-9]{0,4}\)").unwrap();
  static ref WARD_TAIL: Regex = Regex::new(r", wijk.*").unwrap();
  static ref YEAR_TAIL: Regex = Regex::new(r" \([0-9]{4}.*").unwrap();
  static ref YEAR: Regex = Regex::new(r"\d{4}").unwrap();
}

/// Strip the address-type vocabulary prefix, leaving the bare type name.
pub fn address_kind(raw: &str) -> String {
  raw.replace(ADDRESS_KIND_VOCAB, "")
}

/// Normalize an occupation label: lowercase, vocabulary prefix stripped, and
/// the bare "geen"/"zonder" shorthands expanded.
pub fn occupation(raw: &str) -> String {
  let mut value = raw.to_lowercase().replace(OCCUPATION_VOCAB, "");
  if value == "geen" || value == "zonder" {
    value.push_str(" beroep");
  }
  value
}

/// Strip the rights-statement vocabulary prefix.
pub fn rights_statement(raw: &str) -> String {
  raw.replace(RIGHTS_VOCAB, "")
}

/// Reformat `YYYY-MM-DD` or `DD-MM-YYYY` to `D <month> YYYY` with Dutch
/// month names. Anything else is returned unchanged with a warning.
pub fn format_date(raw: &str) -> String {
  let (day, month, year) = if let Some(c) = DATE_YMD.captures(raw) {
    (c[3].to_string(), c[2].to_string(), c[1].to_string())
  } else if let Some(c) = DATE_DMY.captures(raw) {
    (c[1].to_string(), c[2].to_string(), c[3].to_string())
  } else {
    warn!(value = raw, "unrecognized date format");
    return raw.to_string();
  };

  let day: u32 = day.parse().unwrap_or(0);
  format!("{} {} {}", day, month_name(&month), year)
}

fn month_name(month: &str) -> &str {
  match month {
    "01" => "januari",
    "02" => "februari",
    "03" => "maart",
    "04" => "april",
    "05" => "mei",
    "06" => "juni",
    "07" => "juli",
    "08" => "augustus",
    "09" => "september",
    "10" => "oktober",
    "11" => "november",
    "12" => "december",
    other => other,
  }
}

/// Rewrite a raw location-point label into a building label.
pub fn location_label(raw: &str) -> String {
  LOCATION_POINT.replace_all(raw, "Pand").into_owned()
}

/// Remove the embedded ward annotation and bracketed year range from an
/// address label.
pub fn clean_address_label(raw: &str) -> String {
  let cleaned = WARD_INFIX.replace_all(raw, "(");
  YEAR_RANGE.replace_all(&cleaned, "").into_owned()
}

/// Trim an address label down to the bare street-and-number form, dropping
/// ward and year suffixes.
pub fn clean_recent_address(raw: &str) -> String {
  let cleaned = WARD_TAIL.replace_all(raw, "");
  YEAR_TAIL.replace_all(&cleaned, "").into_owned()
}

/// Clean a ward name: drop the city prefix and the period suffix, capitalize.
pub fn clean_ward(raw: &str) -> String {
  let cleaned = capitalize(&raw.replace("Gouda, ", ""));
  YEAR_TAIL.replace_all(&cleaned, "").into_owned()
}

fn capitalize(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// First 4-digit year occurring in a free-text label.
pub fn first_year(raw: &str) -> Option<String> {
  YEAR.find(raw).map(|m| m.as_str().to_string())
}

/// Derive the "most recently known address" label from a `|`-delimited list
/// of address entries carrying `(start-end)` year ranges.
///
/// An open-ended range counts up to `current_year`. All entries sharing the
/// maximum end year are collected, deduplicated and joined. Entries without a
/// parsable year range are ignored; no parsable entries yields an empty
/// string.
pub fn recent_address_label(raw: &str, current_year: i32) -> String {
  if raw.is_empty() {
    return String::new();
  }

  let mut parsed: Vec<(String, i32)> = Vec::new();
  for item in raw.split('|') {
    if let Some(c) = ADDRESS_ENTRY.captures(item) {
      let end_year = if c[3].is_empty() {
        current_year
      } else {
        c[3].parse().unwrap_or(current_year)
      };
      let name = WARD_SUFFIX.replace(c[1].trim(), "").trim().to_string();
      parsed.push((name, end_year));
    }
  }

  if parsed.is_empty() {
    return String::new();
  }

  let max_year = parsed.iter().map(|(_, year)| *year).max().unwrap_or(0);
  let mut seen = HashSet::new();
  let recent: Vec<String> = parsed
    .into_iter()
    .filter(|(name, year)| *year == max_year && seen.insert(name.clone()))
    .map(|(name, _)| name)
    .collect();

  format!("Pand recent bekend als {}", recent.join(", "))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_iso_shape() {
    assert_eq!(format_date("1830-03-07"), "7 maart 1830");
  }

  #[test]
  fn date_day_first_shape() {
    assert_eq!(format_date("07-03-1830"), "7 maart 1830");
  }

  #[test]
  fn date_fallback_passes_through() {
    assert_eq!(format_date("circa 1830"), "circa 1830");
  }

  #[test]
  fn occupation_is_normalized() {
    assert_eq!(
      occupation("https://iisg.amsterdam/resource/hsn/occupation/Bakker"),
      "bakker"
    );
    assert_eq!(occupation("geen"), "geen beroep");
    assert_eq!(occupation("Zonder"), "zonder beroep");
  }

  #[test]
  fn location_label_is_rewritten() {
    assert_eq!(location_label("Locatiepunt L123, Markt 1"), "Pand Markt 1");
  }

  #[test]
  fn address_label_cleanup() {
    assert_eq!(
      clean_address_label("Markt 1, wijk B nr 4 (1850-1900)"),
      "Markt 1"
    );
    assert_eq!(clean_address_label("Markt 1 (1850-1900)"), "Markt 1");
    assert_eq!(clean_address_label("Markt 1 (1850-)"), "Markt 1");
  }

  #[test]
  fn ward_cleanup() {
    assert_eq!(clean_ward("Gouda, wijk noord (1900-1950)"), "Wijk noord");
  }

  #[test]
  fn recent_label_prefers_open_ended_range() {
    // open-ended entry extends to the current year and wins alone
    assert_eq!(
      recent_address_label("Elm St (1900-1950)|Oak Ave (1950-)", 2024),
      "Pand recent bekend als Oak Ave"
    );
  }

  #[test]
  fn recent_label_collects_ties_and_dedups() {
    assert_eq!(
      recent_address_label("A (1900-1950)|B (1940-1950)|B (1945-1950)", 2024),
      "Pand recent bekend als A, B"
    );
  }

  #[test]
  fn recent_label_strips_ward_annotations() {
    assert_eq!(
      recent_address_label("Markt 1, wijk B nr 4 (1850-)", 2024),
      "Pand recent bekend als Markt 1"
    );
  }

  #[test]
  fn recent_label_empty_when_nothing_parses() {
    assert_eq!(recent_address_label("", 2024), "");
    assert_eq!(recent_address_label("Markt 1", 2024), "");
  }
}
