//! Domain entities returned by the gateway.
//!
//! These are the nested shapes the boundary layer serializes; field values
//! arrive pre-formatted from the aggregation pass.

use serde::{Deserialize, Serialize};

/// Lightweight street reference inside a sub-collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreetRef {
  pub identifier: String,
  pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Street {
  pub identifier: String,
  pub name: String,
  pub alt_names: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Period {
  pub identifier: String,
  pub name: String,
  pub alt_names: Option<String>,
  pub description: Option<String>,
  pub start_year: Option<String>,
  pub end_year: Option<String>,
}

/// One building in the index, grouped by its location point.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingSummary {
  pub identifier: String,
  pub name: String,
  pub streets: Vec<StreetRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
  pub identifier: String,
  pub name: String,
  pub occupation: Option<String>,
  pub dating: Option<String>,
  pub building_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoSummary {
  pub identifier: String,
  pub title: String,
  pub thumbnail: String,
  pub creator: Option<String>,
  pub dating: Option<String>,
  /// Holding organisation, derived from the record URL.
  pub source: String,
  pub streets: Vec<StreetRef>,
  pub building_ids: Vec<String>,
}

/// One historical address record of a building.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
  pub kind: String,
  pub name: String,
  pub dating: String,
  pub ward: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonRef {
  pub identifier: String,
  pub name: String,
  pub occupation: Option<String>,
  pub dating: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoRef {
  pub identifier: String,
  pub title: String,
  pub thumbnail: String,
  pub dating: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildingDetail {
  pub identifier: String,
  pub name: String,
  pub dating: Option<String>,
  pub addresses: Vec<Address>,
  pub persons: Vec<PersonRef>,
  pub photos: Vec<PhotoRef>,
}

/// Provenance of a person observation.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRecord {
  pub name: Option<String>,
  pub short_name: String,
  pub dating: String,
  pub url: Option<String>,
}

/// Building reference on a person detail, carrying the address the person
/// was attested at.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingRef {
  pub identifier: Option<String>,
  pub name: String,
  pub source: SourceRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonDetail {
  pub identifier: String,
  pub name: String,
  pub birth_date: Option<String>,
  pub birth_place: Option<String>,
  pub death_date: Option<String>,
  pub death_place: Option<String>,
  pub age: Option<String>,
  pub occupation: Option<String>,
  pub buildings: Vec<BuildingRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbyPhoto {
  pub identifier: String,
  pub title: String,
  pub thumbnail: String,
  pub iiif_info: String,
}

/// Building reference on a photo detail; the name is the building's most
/// recent address.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoBuildingRef {
  pub identifier: String,
  pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoDetail {
  pub identifier: String,
  pub title: String,
  pub thumbnail: String,
  pub image: String,
  pub iiif_info: String,
  pub creator: Option<String>,
  pub rights: Option<String>,
  pub url: Option<String>,
  pub dating: Option<String>,
  pub source: String,
  pub streets: Vec<StreetRef>,
  pub buildings: Vec<PhotoBuildingRef>,
  pub nearby: Vec<NearbyPhoto>,
}

/// One feature of the year map; geometry is the raw WKT text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearFeature {
  pub identifier: String,
  pub name: String,
  pub geometry: Option<String>,
}

/// Derived building stock for one year. Cached as a whole, independently of
/// the raw query cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearMap {
  pub year: i32,
  pub features: Vec<YearFeature>,
}
