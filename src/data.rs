//! Aggregation of result rows into domain entities.
//!
//! One fold per entity family: rows are grouped on their primary identifier
//! in encounter order, sub-collections are deduplicated on their own
//! identifiers, and pages are sliced only after the full count is known.
//! Ordering always comes from the query; nothing here sorts an index.

use crate::aggregate::{paginate, OrderedMap, Page, DEFAULT_LIMIT, MAX_LIMIT};
use crate::cache::CacheStore;
use crate::error::LookupError;
use crate::format;
use crate::periods::Periods;
use crate::sparql::{queries, Row, SparqlClient, Term};
use crate::types::{
  Address, BuildingDetail, BuildingRef, BuildingSummary, NearbyPhoto, Period, PersonDetail,
  PersonRef, PersonSummary, PhotoBuildingRef, PhotoDetail, PhotoRef, PhotoSummary, SourceRecord,
  Street, StreetRef, YearFeature, YearMap,
};
use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
  static ref LOCATION_CODE: Regex = Regex::new(r"^L[0-9]+$").unwrap();
}

const VALID_STATUS: [&str; 3] = ["alle", "bestaand", "afgebroken"];

/// Filters accepted by the index lookups. Everything is optional; limit and
/// offset default to 10 and 0.
#[derive(Debug, Clone, Default)]
pub struct IndexFilter {
  pub q: Option<String>,
  pub street: Option<String>,
  pub period: Option<String>,
  pub status: Option<String>,
  pub limit: Option<usize>,
  pub offset: Option<usize>,
}

#[derive(Debug)]
struct Resolved {
  q: Option<String>,
  street: Option<Term>,
  period: Option<(i32, i32)>,
  limit: usize,
  offset: usize,
}

fn resolve_filter(periods: &Periods, filter: &IndexFilter) -> Result<Resolved, LookupError> {
  let q = filter
    .q
    .as_deref()
    .map(str::trim)
    .filter(|q| !q.is_empty())
    .map(str::to_string);

  let street = match filter.street.as_deref().filter(|s| !s.is_empty()) {
    Some(raw) => Some(Term::iri(raw)?),
    None => None,
  };

  let period = match filter.period.as_deref().filter(|p| !p.is_empty()) {
    Some(raw) => Some(
      periods
        .range_of(raw)
        .ok_or_else(|| LookupError::UnknownPeriod(raw.to_string()))?,
    ),
    None => None,
  };

  Ok(Resolved {
    q,
    street,
    period,
    limit: filter.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
    offset: filter.offset.unwrap_or(0),
  })
}

fn validate_status(status: Option<&str>) -> Result<(), LookupError> {
  match status {
    None => Ok(()),
    Some(value) if VALID_STATUS.contains(&value) => Ok(()),
    Some(value) => Err(LookupError::InvalidStatus(value.to_string())),
  }
}

/// Orchestrates query execution and aggregation for all entity families.
pub struct DataService {
  sparql: SparqlClient,
  periods: Periods,
}

impl DataService {
  pub fn new(sparql: SparqlClient) -> Self {
    Self {
      sparql,
      periods: Periods::new(),
    }
  }

  pub fn cache(&self) -> &CacheStore {
    self.sparql.cache()
  }

  pub fn periods_table(&self) -> &Periods {
    &self.periods
  }

  /// Full street listing.
  pub async fn streets(&self) -> Vec<Street> {
    let rows = self.sparql.select(&queries::streets()).await;
    rows
      .iter()
      .map(|row| Street {
        identifier: row.text("identifier"),
        name: row.text("naam"),
        alt_names: row.opt("naam_alt"),
      })
      .collect()
  }

  /// Period listing from the remote store.
  pub async fn periods(&self) -> Vec<Period> {
    let rows = self.sparql.select(&queries::periods()).await;
    rows
      .iter()
      .map(|row| Period {
        identifier: row.text("identifier"),
        name: row.text("naam"),
        alt_names: row.opt("naam_alt"),
        description: row.opt("omschrijving"),
        start_year: row.opt("startjaar"),
        end_year: row.opt("eindjaar"),
      })
      .collect()
  }

  /// Paged building index. The status filter is validated but not pushed
  /// into the query; the remote data carries no demolition predicate yet.
  pub async fn buildings(
    &self,
    filter: &IndexFilter,
  ) -> Result<Page<BuildingSummary>, LookupError> {
    validate_status(filter.status.as_deref())?;
    let resolved = resolve_filter(&self.periods, filter)?;
    let rows = self
      .sparql
      .select(&queries::building_index(
        resolved.q.as_deref(),
        resolved.street.as_ref(),
      ))
      .await;
    Ok(paginate(group_buildings(&rows), resolved.limit, resolved.offset))
  }

  /// Paged person index.
  pub async fn persons(&self, filter: &IndexFilter) -> Result<Page<PersonSummary>, LookupError> {
    let resolved = resolve_filter(&self.periods, filter)?;
    let rows = self
      .sparql
      .select(&queries::person_index(
        resolved.q.as_deref(),
        resolved.street.as_ref(),
        resolved.period,
      ))
      .await;
    Ok(paginate(group_persons(&rows), resolved.limit, resolved.offset))
  }

  /// Paged photo index. A search term shaped like a location-point code
  /// (`L123`) switches to the location variant of the query.
  pub async fn photos(&self, filter: &IndexFilter) -> Result<Page<PhotoSummary>, LookupError> {
    let resolved = resolve_filter(&self.periods, filter)?;
    let query = match resolved.q.as_deref() {
      Some(q) if LOCATION_CODE.is_match(q) => queries::photo_index_location(q),
      q => queries::photo_index_description(q, resolved.street.as_ref(), resolved.period),
    };
    let rows = self.sparql.select(&query).await;
    Ok(paginate(group_photos(&rows), resolved.limit, resolved.offset))
  }

  /// One building with its address history, residents and photos.
  pub async fn building(&self, identifier: &str) -> Result<Option<BuildingDetail>, LookupError> {
    let id = Term::iri(identifier)?;

    let name_rows = self.sparql.select(&queries::building_name(&id)).await;
    let Some(first) = name_rows.first() else {
      return Ok(None);
    };

    let photos: Vec<PhotoRef> = self
      .sparql
      .select(&queries::photos_at_location(&id))
      .await
      .iter()
      .map(|row| PhotoRef {
        identifier: row.text("identifier"),
        title: row.text("titel"),
        thumbnail: row.text("thumbnail"),
        dating: row.text("datering"),
      })
      .collect();

    let persons: Vec<PersonRef> = self
      .sparql
      .select(&queries::persons_at_location(&id))
      .await
      .iter()
      .map(|row| PersonRef {
        identifier: row.text("identifier"),
        name: row.text("naam"),
        occupation: row.value("beroep").map(format::occupation),
        dating: row.opt("datering"),
      })
      .collect();

    let mut address_rows = self.sparql.select(&queries::addresses_at_location(&id, 0)).await;
    address_rows.sort_by_key(|row| year_prefix(row.value("startDate")));
    let addresses: Vec<Address> = address_rows
      .iter()
      .map(|row| Address {
        kind: format::address_kind(&row.text("type")),
        name: format::clean_address_label(&row.text("naam")),
        dating: format!("{} – {}", row.text("startDate"), row.text("endDate")),
        ward: format::clean_ward(&row.text("wijknaam")),
      })
      .collect();

    Ok(Some(BuildingDetail {
      identifier: identifier.to_string(),
      name: format!("Locatiepunt {}", first.text("naam")),
      dating: None,
      addresses,
      persons,
      photos,
    }))
  }

  /// One person observation with source record and attested address.
  pub async fn person(&self, identifier: &str) -> Result<Option<PersonDetail>, LookupError> {
    let id = Term::iri(identifier)?;
    let rows = self.sparql.select(&queries::person(&id)).await;
    let Some(row) = rows.first() else {
      return Ok(None);
    };

    let (dating, range_from, range_to) = derive_source_dating(
      row.value("beginDate"),
      row.value("endDate"),
      row.value("bronNaam"),
    );

    let source = SourceRecord {
      name: row.opt("bronNaam"),
      short_name: row.text("bronInventaris"),
      dating,
      url: row.opt("bronUrl"),
    };

    let address = match row.value("locatiepunt").map(Term::iri) {
      Some(Ok(location)) => {
        let address_rows = self
          .sparql
          .select(&queries::addresses_at_location(&location, 0))
          .await;
        address_during(
          &address_rows,
          year_prefix(range_from.as_deref()),
          year_prefix(range_to.as_deref()),
        )
      }
      _ => String::new(),
    };

    let building = BuildingRef {
      identifier: row.opt("locatiepunt"),
      name: address,
      source,
    };

    Ok(Some(PersonDetail {
      identifier: identifier.to_string(),
      name: row.text("name"),
      birth_date: row.value("birthDate").map(format::format_date),
      birth_place: row.opt("birthPlace"),
      death_date: row.value("deathDate").map(format::format_date),
      death_place: row.opt("deathPlace"),
      age: row.opt("hasAge"),
      occupation: row.value("hasOccupation").map(format::occupation),
      buildings: vec![building],
    }))
  }

  /// One photo with streets, buildings and nearby photos.
  pub async fn photo(&self, identifier: &str) -> Result<Option<PhotoDetail>, LookupError> {
    let id = Term::iri(identifier)?;

    let nearby: Vec<NearbyPhoto> = self
      .sparql
      .select(&queries::photos_nearby(&id))
      .await
      .iter()
      .map(|row| NearbyPhoto {
        identifier: row.text("identifier"),
        title: row.text("titel"),
        thumbnail: row.text("thumbnail"),
        iiif_info: row.text("iiif_info_json"),
      })
      .collect();

    let rows = self.sparql.select(&queries::photo(&id)).await;
    let Some(first) = rows.first() else {
      return Ok(None);
    };

    let iiif_info = first.text("iiif_info_json");
    let image = if iiif_info.is_empty() {
      String::new()
    } else {
      iiif_info.replace("info.json", "full/500,/0/default.jpg")
    };

    let mut streets: OrderedMap<StreetRef> = OrderedMap::new();
    let mut buildings: OrderedMap<PhotoBuildingRef> = OrderedMap::new();
    for row in &rows {
      if let (Some(street), Some(street_name)) = (row.value("straat"), row.value("straatnaam")) {
        streets.insert_once(
          street,
          StreetRef {
            identifier: street.to_string(),
            name: street_name.to_string(),
          },
        );
      }
      if let Some(location) = row.value("locatiepunt") {
        if !buildings.contains_key(location) {
          let name = self.recent_building_name(location).await;
          buildings.insert_once(
            location,
            PhotoBuildingRef {
              identifier: location.to_string(),
              name,
            },
          );
        }
      }
    }

    Ok(Some(PhotoDetail {
      identifier: first.text("identifier"),
      title: first.text("titel"),
      thumbnail: first.text("thumbnail"),
      image,
      iiif_info,
      creator: first.opt("vervaardiger"),
      rights: first
        .value("informatieAuteursRechten")
        .map(format::rights_statement),
      url: first.opt("url"),
      dating: first.opt("datering"),
      source: photo_source_organisation(first.value("url")),
      streets: streets.into_values(),
      buildings: buildings.into_values(),
      nearby,
    }))
  }

  /// Display name for a building on a photo detail: its most recent address,
  /// from a single-row address lookup.
  async fn recent_building_name(&self, location: &str) -> String {
    let fallback = "Pand".to_string();
    let Ok(term) = Term::iri(location) else {
      return fallback;
    };
    let rows = self.sparql.select(&queries::addresses_at_location(&term, 1)).await;
    let Some(row) = rows.first() else {
      return fallback;
    };
    let location_name = row.text("locatienaam");
    let address_name = row.text("naam");
    if location_name.is_empty() || address_name.is_empty() {
      return fallback;
    }
    format!(
      "Pand meest recent bekend als {}",
      format::clean_recent_address(&address_name)
    )
  }

  /// Building stock for one year. The folded feature collection is cached as
  /// a derived result, separate from the raw query cache.
  pub async fn buildings_by_year(&self, year: i32) -> YearMap {
    let key = format!("year-map:{}", year);
    if let Some(cached) = self.cache().get(&key).await {
      match serde_json::from_str::<YearMap>(&cached) {
        Ok(map) => return map,
        Err(err) => warn!(error = %err, "malformed cached year map, rebuilding"),
      }
    }

    let rows = self.sparql.select(&queries::buildings_in_year(year)).await;
    let current_year = Utc::now().year();
    let features = rows.iter().map(|row| year_feature(row, current_year)).collect();
    let map = YearMap { year, features };

    if let Ok(body) = serde_json::to_string(&map) {
      self.cache().put(&key, &body, self.cache().ttl()).await;
    }
    map
  }
}

struct BuildingAcc {
  identifier: String,
  name: String,
  streets: OrderedMap<StreetRef>,
}

fn group_buildings(rows: &[Row]) -> Vec<BuildingSummary> {
  let mut grouped: OrderedMap<BuildingAcc> = OrderedMap::new();

  for row in rows {
    let Some(id) = row.value("locatiepunt") else {
      continue;
    };
    let entry = grouped.entry_or_insert_with(id, || BuildingAcc {
      identifier: id.to_string(),
      name: format::location_label(&row.text("naam")),
      streets: OrderedMap::new(),
    });
    if let (Some(street), Some(street_name)) = (row.value("straat"), row.value("straatnaam")) {
      entry.streets.insert_once(
        street,
        StreetRef {
          identifier: street.to_string(),
          name: street_name.to_string(),
        },
      );
    }
  }

  grouped
    .into_values()
    .into_iter()
    .map(|acc| BuildingSummary {
      identifier: acc.identifier,
      name: acc.name,
      streets: acc.streets.into_values(),
    })
    .collect()
}

fn group_persons(rows: &[Row]) -> Vec<PersonSummary> {
  let mut grouped: OrderedMap<PersonSummary> = OrderedMap::new();

  for row in rows {
    let Some(id) = row.value("identifier") else {
      continue;
    };
    grouped.entry_or_insert_with(id, || PersonSummary {
      identifier: id.to_string(),
      name: row.text("naam"),
      occupation: row.value("beroep").map(format::occupation),
      dating: row.opt("datering"),
      building_ids: row
        .value("locatiepunt")
        .map(|location| vec![location.to_string()])
        .unwrap_or_default(),
    });
  }

  grouped.into_values()
}

struct PhotoAcc {
  identifier: String,
  title: String,
  thumbnail: String,
  creator: Option<String>,
  dating: Option<String>,
  source: String,
  streets: OrderedMap<StreetRef>,
  building_ids: OrderedMap<String>,
}

fn group_photos(rows: &[Row]) -> Vec<PhotoSummary> {
  let mut grouped: OrderedMap<PhotoAcc> = OrderedMap::new();

  for row in rows {
    let Some(id) = row.value("identifier") else {
      continue;
    };
    let entry = grouped.entry_or_insert_with(id, || PhotoAcc {
      identifier: id.to_string(),
      title: row.text("titel"),
      thumbnail: row.text("thumbnail"),
      creator: row.opt("vervaardiger"),
      dating: row.opt("datering"),
      source: photo_source(row.value("url")),
      streets: OrderedMap::new(),
      building_ids: OrderedMap::new(),
    });
    if let (Some(street), Some(street_name)) = (row.value("straat"), row.value("straatnaam")) {
      entry.streets.insert_once(
        street,
        StreetRef {
          identifier: street.to_string(),
          name: street_name.to_string(),
        },
      );
    }
    if let Some(location) = row.value("locatiepunt") {
      entry.building_ids.insert_once(location, location.to_string());
    }
  }

  grouped
    .into_values()
    .into_iter()
    .map(|acc| PhotoSummary {
      identifier: acc.identifier,
      title: acc.title,
      thumbnail: acc.thumbnail,
      creator: acc.creator,
      dating: acc.dating,
      source: acc.source,
      streets: acc.streets.into_values(),
      building_ids: acc.building_ids.into_values(),
    })
    .collect()
}

fn photo_source(url: Option<&str>) -> String {
  if url.is_some_and(|u| u.contains("samh.nl")) {
    "SAMH".to_string()
  } else {
    "RCE".to_string()
  }
}

fn photo_source_organisation(url: Option<&str>) -> String {
  if url.is_some_and(|u| u.contains("samh.nl")) {
    "Streekarchief Midden-Holland".to_string()
  } else {
    "Rijkdienst voor het Cultureel Erfgoed".to_string()
  }
}

/// Leading year digits of a value, zero when absent or non-numeric.
fn year_prefix(value: Option<&str>) -> i32 {
  let Some(value) = value else {
    return 0;
  };
  let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
  digits.parse().unwrap_or(0)
}

/// Source dating for a person detail.
///
/// Returns the display string plus the year range used for the address
/// lookup. Without a begin date the display falls back to a 4-digit year
/// scraped from the source name, which then also bounds the range.
fn derive_source_dating(
  begin: Option<&str>,
  end: Option<&str>,
  source_name: Option<&str>,
) -> (String, Option<String>, Option<String>) {
  if let Some(begin) = begin {
    let dating = match end {
      Some(end) if end != begin => format!("{} – {}", begin, end),
      Some(_) => begin.to_string(),
      None => format!("{} – nu", begin),
    };
    return (dating, Some(begin.to_string()), end.map(str::to_string));
  }

  match source_name.and_then(format::first_year) {
    Some(year) => (year.clone(), Some(year.clone()), Some(year)),
    None => ("????".to_string(), None, None),
  }
}

/// The address a building carried during `[year_from, year_to]`, joined when
/// several overlap. An unparseable end year counts as open-ended.
fn address_during(rows: &[Row], year_from: i32, year_to: i32) -> String {
  let year_to = if year_to == 0 { year_from } else { year_to };
  let mut names: Vec<String> = Vec::new();

  for row in rows {
    let start = year_prefix(row.value("startDate"));
    let end = match row.value("endDate").map(|v| year_prefix(Some(v))) {
      Some(0) | None => 9999,
      Some(year) => year,
    };
    if start <= year_to && end >= year_from {
      let name = row.text("naam");
      if !name.is_empty() && !names.contains(&name) {
        names.push(name);
      }
    }
  }

  names.join(", ")
}

fn year_feature(row: &Row, current_year: i32) -> YearFeature {
  let identifier = row
    .value("locatiepunt")
    .or_else(|| row.value("identifier"))
    .unwrap_or_default()
    .to_string();
  let name = match row.value("adressen") {
    Some(addresses) => format::recent_address_label(addresses, current_year),
    None => row.text("naam"),
  };
  YearFeature {
    identifier,
    name,
    geometry: row.opt("geometry"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn row(value: serde_json::Value) -> Row {
    serde_json::from_value(value).unwrap()
  }

  fn term(value: &str) -> serde_json::Value {
    json!({"type": "literal", "value": value})
  }

  #[test]
  fn buildings_group_on_location_and_dedup_streets() {
    let rows = vec![
      row(json!({
        "locatiepunt": term("A"), "naam": term("Foo"),
        "straat": term("S1"), "straatnaam": term("Elm")
      })),
      row(json!({
        "locatiepunt": term("A"), "naam": term("ignored"),
        "straat": term("S2"), "straatnaam": term("Oak")
      })),
      row(json!({"locatiepunt": term("B"), "naam": term("Bar")})),
    ];

    let buildings = group_buildings(&rows);
    assert_eq!(buildings.len(), 2);
    assert_eq!(buildings[0].identifier, "A");
    assert_eq!(buildings[0].name, "Foo");
    assert_eq!(
      buildings[0]
        .streets
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>(),
      vec!["Elm", "Oak"]
    );
    assert_eq!(buildings[1].identifier, "B");
    assert!(buildings[1].streets.is_empty());

    let page = paginate(buildings, 10, 0);
    assert_eq!(page.total, 2);
  }

  #[test]
  fn rows_without_a_primary_identifier_are_skipped() {
    let rows = vec![
      row(json!({"naam": term("no id")})),
      row(json!({"locatiepunt": term(""), "naam": term("empty id")})),
      row(json!({"locatiepunt": term("A"), "naam": term("ok")})),
    ];
    assert_eq!(group_buildings(&rows).len(), 1);
  }

  #[test]
  fn repeated_street_is_not_duplicated() {
    let rows = vec![
      row(json!({
        "locatiepunt": term("A"), "naam": term("Foo"),
        "straat": term("S1"), "straatnaam": term("Elm")
      })),
      row(json!({
        "locatiepunt": term("A"), "naam": term("Foo"),
        "straat": term("S1"), "straatnaam": term("Elm")
      })),
    ];
    assert_eq!(group_buildings(&rows)[0].streets.len(), 1);
  }

  #[test]
  fn persons_keep_their_first_row() {
    let rows = vec![
      row(json!({
        "identifier": term("P1"), "naam": term("Jan"),
        "beroep": term("Bakker"), "datering": term("1830"),
        "locatiepunt": term("L1")
      })),
      row(json!({
        "identifier": term("P1"), "naam": term("Jan (dubbel)"),
        "datering": term("1840")
      })),
    ];

    let persons = group_persons(&rows);
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].name, "Jan");
    assert_eq!(persons[0].occupation.as_deref(), Some("bakker"));
    assert_eq!(persons[0].dating.as_deref(), Some("1830"));
    assert_eq!(persons[0].building_ids, vec!["L1".to_string()]);
  }

  #[test]
  fn photos_collect_streets_and_building_ids() {
    let rows = vec![
      row(json!({
        "identifier": term("F1"), "titel": term("Gezicht op de Markt"),
        "thumbnail": term("t.jpg"), "url": term("https://samh.nl/x"),
        "straat": term("S1"), "straatnaam": term("Elm"), "locatiepunt": term("L1")
      })),
      row(json!({
        "identifier": term("F1"), "titel": term("ignored"),
        "straat": term("S1"), "straatnaam": term("Elm"), "locatiepunt": term("L2")
      })),
    ];

    let photos = group_photos(&rows);
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].source, "SAMH");
    assert_eq!(photos[0].streets.len(), 1);
    assert_eq!(
      photos[0].building_ids,
      vec!["L1".to_string(), "L2".to_string()]
    );
  }

  #[test]
  fn photo_source_defaults_to_rce() {
    assert_eq!(photo_source(None), "RCE");
    assert_eq!(photo_source(Some("https://rce.example.org/1")), "RCE");
  }

  #[test]
  fn filter_defaults_and_clamping() {
    let periods = Periods::with_current_year(2024);
    let resolved = resolve_filter(&periods, &IndexFilter::default()).unwrap();
    assert_eq!(resolved.limit, DEFAULT_LIMIT);
    assert_eq!(resolved.offset, 0);
    assert!(resolved.q.is_none());

    let resolved = resolve_filter(
      &periods,
      &IndexFilter {
        limit: Some(100_000),
        ..Default::default()
      },
    )
    .unwrap();
    assert_eq!(resolved.limit, MAX_LIMIT);
  }

  #[test]
  fn unknown_period_is_a_validation_error() {
    let periods = Periods::with_current_year(2024);
    let filter = IndexFilter {
      period: Some("https://n2t.net/ark:/60537/nope".to_string()),
      ..Default::default()
    };
    assert_eq!(
      resolve_filter(&periods, &filter).unwrap_err(),
      LookupError::UnknownPeriod("https://n2t.net/ark:/60537/nope".to_string())
    );
  }

  #[test]
  fn invalid_street_is_a_validation_error() {
    let periods = Periods::with_current_year(2024);
    let filter = IndexFilter {
      street: Some("not an iri".to_string()),
      ..Default::default()
    };
    assert!(matches!(
      resolve_filter(&periods, &filter),
      Err(LookupError::InvalidIdentifier(_))
    ));
  }

  #[test]
  fn status_is_validated() {
    assert!(validate_status(None).is_ok());
    assert!(validate_status(Some("alle")).is_ok());
    assert!(validate_status(Some("bestaand")).is_ok());
    assert_eq!(
      validate_status(Some("sloop")),
      Err(LookupError::InvalidStatus("sloop".to_string()))
    );
  }

  #[test]
  fn source_dating_shapes() {
    assert_eq!(
      derive_source_dating(Some("1830"), Some("1840"), None).0,
      "1830 – 1840"
    );
    assert_eq!(derive_source_dating(Some("1830"), Some("1830"), None).0, "1830");
    assert_eq!(derive_source_dating(Some("1830"), None, None).0, "1830 – nu");

    let (dating, from, to) =
      derive_source_dating(None, None, Some("Volkstelling 1840, wijk B"));
    assert_eq!(dating, "1840");
    assert_eq!(from.as_deref(), Some("1840"));
    assert_eq!(to.as_deref(), Some("1840"));

    assert_eq!(derive_source_dating(None, None, Some("geen jaartal")).0, "????");
  }

  #[test]
  fn address_during_overlapping_years() {
    let rows = vec![
      row(json!({
        "naam": term("Markt 1"), "startDate": term("1800"), "endDate": term("1850"),
        "straaturi": term("S1")
      })),
      row(json!({
        "naam": term("Markt 1a"), "startDate": term("1850"), "endDate": term("nu"),
        "straaturi": term("S1")
      })),
      row(json!({
        "naam": term("Achter de Kerk 2"), "startDate": term("1700"), "endDate": term("1799"),
        "straaturi": term("S2")
      })),
    ];

    assert_eq!(address_during(&rows, 1830, 1840), "Markt 1");
    // open-ended record matches recent years
    assert_eq!(address_during(&rows, 1900, 1910), "Markt 1a");
    // boundary year hits both records
    assert_eq!(address_during(&rows, 1850, 0), "Markt 1, Markt 1a");
  }

  #[test]
  fn year_feature_prefers_the_recent_address_label() {
    let feature = year_feature(
      &row(json!({
        "locatiepunt": term("L1"), "naam": term("fallback"),
        "adressen": term("Elm St (1900-1950)|Oak Ave (1950-)"),
        "geometry": term("POINT(4.7 52.0)")
      })),
      2024,
    );
    assert_eq!(feature.identifier, "L1");
    assert_eq!(feature.name, "Pand recent bekend als Oak Ave");
    assert_eq!(feature.geometry.as_deref(), Some("POINT(4.7 52.0)"));

    let feature = year_feature(&row(json!({"identifier": term("B1"), "naam": term("Pand X")})), 2024);
    assert_eq!(feature.identifier, "B1");
    assert_eq!(feature.name, "Pand X");
    assert_eq!(feature.geometry, None);
  }
}
