//! Query templates for the time-machine dataset.
//!
//! The SPARQL texts are treated as opaque: they encode the remote schema and
//! are carried verbatim. Every interpolation point goes through [`Term`], so
//! caller input cannot alter query structure.

use super::query::{SelectQuery, Term};

pub const PREFIXES: &str = "\
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
PREFIX geo: <http://www.opengis.net/ont/geosparql#>
PREFIX geof: <http://www.opengis.net/def/function/geosparql/>
PREFIX gtm: <https://www.goudatijdmachine.nl/def#>
PREFIX hg: <http://rdf.histograph.io/>
PREFIX o: <http://omeka.org/s/vocabs/o#>
PREFIX osm: <https://osm2rdf.cs.uni-freiburg.de/rdf#>
PREFIX owl: <http://www.w3.org/2002/07/owl#>
PREFIX picom: <https://personsincontext.org/model#>
PREFIX pnv: <https://w3id.org/pnv#>
PREFIX prov: <http://www.w3.org/ns/prov#>
PREFIX ql: <http://qlever.cs.uni-freiburg.de/builtin-functions/>
PREFIX roar: <https://w3id.org/roar#>
PREFIX sdo: <https://schema.org/>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>
PREFIX rico: <https://www.ica.org/standards/RiC/ontology#>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
";

/// Default entries shown on an unfiltered building index.
const FEATURED_BUILDINGS: [&str; 10] = [
  "https://n2t.net/ark:/60537/bjzNjZZ",
  "https://n2t.net/ark:/60537/bbFcwbs",
  "https://n2t.net/ark:/60537/bVQ1Wc3",
  "https://n2t.net/ark:/60537/bNVs7nX",
  "https://n2t.net/ark:/60537/bG0RiAq",
  "https://n2t.net/ark:/60537/by6guNT",
  "https://n2t.net/ark:/60537/bqpompu",
  "https://n2t.net/ark:/60537/bhuNxBC",
  "https://n2t.net/ark:/60537/b1FCTVe",
  "https://n2t.net/ark:/60537/bLQsjYp",
];

const FEATURED_PERSONS: [&str; 10] = [
  "https://n2t.net/ark:/60537/b01dp31",
  "https://n2t.net/ark:/60537/b003nsh",
  "https://n2t.net/ark:/60537/b01dqqv",
  "https://n2t.net/ark:/60537/b003q2k",
  "https://n2t.net/ark:/60537/b01dr7f",
  "https://n2t.net/ark:/60537/b62kMd",
  "https://n2t.net/ark:/60537/b003q9g",
  "https://n2t.net/ark:/60537/b003nqp",
  "https://n2t.net/ark:/60537/b003qnm",
  "https://n2t.net/ark:/60537/b01dt3j",
];

const FEATURED_PHOTOS: [&str; 10] = [
  "https://n2t.net/ark:/60537/brenuH",
  "https://n2t.net/ark:/60537/b01sdpt",
  "https://n2t.net/ark:/60537/bO8mhv",
  "https://n2t.net/ark:/60537/bZarCF",
  "https://n2t.net/ark:/60537/b5qoEx",
  "https://n2t.net/ark:/60537/bGQRcY",
  "https://n2t.net/ark:/60537/b8xT00",
  "https://n2t.net/ark:/60537/bH3yMd",
  "https://n2t.net/ark:/60537/bBEmQv",
  "https://n2t.net/ark:/60537/b5PMTR",
];

fn values_clause(var: &str, iris: &[&str]) -> String {
  let list: Vec<String> = iris.iter().map(|iri| format!("<{}>", iri)).collect();
  format!("VALUES ?{} {{ {} }} ", var, list.join(" "))
}

fn contains_filter(var: &str, needle: &str) -> String {
  format!(
    " FILTER(CONTAINS(LCASE(?{}), {}))",
    var,
    Term::literal(needle.to_lowercase())
  )
}

fn period_filter(var: &str, (start, end): (i32, i32)) -> String {
  format!(
    " FILTER(?{var}>={} && ?{var}<={} ) ",
    Term::year(start),
    Term::year(end)
  )
}

/// Full street listing with alternate names.
pub fn streets() -> SelectQuery {
  SelectQuery::new(
    r#"
SELECT ?identifier ?naam (GROUP_CONCAT(DISTINCT ?altname; separator=", ") AS ?naam_alt) WHERE {
?identifier a gtm:Straat;
     sdo:name ?naam ;
     sdo:identifier ?id .
OPTIONAL { ?identifier sdo:alternateName ?altname }
}
GROUP BY ?identifier ?naam
ORDER BY ?naam"#,
  )
}

/// Period concepts, open-ended end dates coalesced to the current year.
pub fn periods() -> SelectQuery {
  SelectQuery::new(
    r#"
SELECT ?identifier ?naam ?omschrijving (GROUP_CONCAT(DISTINCT ?altname; separator=", ") AS ?naam_alt) ?startjaar ?eindjaar WHERE {
  ?identifier a skos:Concept ;
              sdo:name ?naam ;
              o:item_set <https://n2t.net/ark:/60537/b01v5rp> ;
              sdo:startDate ?startjaar ;
              sdo:description ?omschrijving .
  OPTIONAL { ?identifier sdo:alternateName ?altname . }
  OPTIONAL { ?identifier sdo:endDate ?jaar_eind . }
  BIND( COALESCE(?jaar_eind, YEAR(NOW())) AS ?eindjaar )
}
GROUP BY ?identifier ?naam ?omschrijving ?startjaar ?eindjaar
ORDER BY ?startjaar
"#,
  )
}

/// Building index rows: location point, label, and the streets it touches.
/// Without a search term or street filter a fixed featured set is shown.
pub fn building_index(q: Option<&str>, street: Option<&Term>) -> SelectQuery {
  let mut head = String::new();
  let mut search = String::new();
  match q {
    Some(q) => search = contains_filter("naam", q),
    None => {
      if street.is_none() {
        head = values_clause("locatiepunt", &FEATURED_BUILDINGS);
      }
    }
  }
  if let Some(street) = street {
    head.push_str(&format!("BIND({} AS ?straat)", street));
  }

  SelectQuery::new(format!(
    r#"
SELECT ?locatiepunt ?naam ?straat ?straatnaam WHERE {{
  {head}
  {{
    ?locatiepunt a geo:Geometry ;
                 <http://omeka.org/s/vocabs/o#item_set> <https://n2t.net/ark:/60537/bsgGtno> ;
                 sdo:mainEntityOfPage/o:label ?naam . {search}
  }}
  {{
    {{
      ?uri geo:hasGeometry ?locatiepunt ;
           a ?type ;
           gtm:straat ?straat .
      FILTER (?type IN (gtm:PlaatselijkeAanduiding, gtm:StraatNummerAanduiding, gtm:NummerAanduiding))
    }} UNION {{
      ?uri a gtm:Huisnaam ;
           gtm:straat ?straat .
    }}
  }}
  {{
    ?straat sdo:name ?straatnaam
  }}
}}
GROUP BY ?locatiepunt ?naam ?straat ?straatnaam
ORDER BY ?naam ?straat"#
  ))
}

/// Person-observation index across the census, tax-register and address-book
/// source families.
pub fn person_index(
  q: Option<&str>,
  street: Option<&Term>,
  period: Option<(i32, i32)>,
) -> SelectQuery {
  let search = q.map(|q| contains_filter("naam", q)).unwrap_or_default();
  let street_clause = street
    .map(|street| format!("; gtm:straat {} ", street))
    .unwrap_or_default();
  let period_clause = period.map(|range| period_filter("datering", range)).unwrap_or_default();
  let head = if q.is_none() && street.is_none() {
    values_clause("identifier", &FEATURED_PERSONS)
  } else {
    String::new()
  };

  SelectQuery::new(format!(
    r#"
SELECT ?identifier ?locatiepunt ?naam ?beroep ?datering WHERE {{
  {head}
  {{
    ?identifier a picom:PersonObservation ;
                sdo:name ?naam ;
                sdo:familyName ?familyname ;
                sdo:givenName ?givenName;
                sdo:identifier ?vermeldingidentifier;
                gtm:plaatselijkeAanduiding ?plaatselijkeaanduiding . {search}
    OPTIONAL {{ ?identifier sdo:hasOccupation/o:label ?beroep }}
    OPTIONAL {{ ?identifier sdo:hasOccupation ?beroep }}
    BIND(COALESCE(
        IF(STRSTARTS(STR(?vermeldingidentifier), "https://www.goudatijdmachine.nl/id/index/volkstelling1830/"), 1830, ?unbound),
        IF(STRSTARTS(STR(?vermeldingidentifier), "https://www.goudatijdmachine.nl/id/index/volkstelling1840/"), 1840, ?unbound),
        IF(STRSTARTS(STR(?vermeldingidentifier), "https://www.goudatijdmachine.nl/id/verponding/1785/"), 1785, ?unbound)
      ) AS ?datering)
    ?plaatselijkeaanduiding geo:hasGeometry ?locatiepunt {street_clause}. {period_clause}
    FILTER(ISIRI(?locatiepunt))
  }}
  UNION
  {{
    {{
      ?identifier a picom:PersonObservation ;
                  sdo:name ?naam ;
                  sdo:datePublished ?datering ;
                  geo:hasGeometry ?locatiepunt {street_clause}. {search} {period_clause}
      OPTIONAL {{ ?identifier sdo:hasOccupation/o:label ?beroep }}
      OPTIONAL {{ ?identifier sdo:hasOccupation ?beroep }}
      OPTIONAL {{ ?identifier sdo:familyName ?familyname }}
      OPTIONAL {{ ?identifier sdo:givenName ?givenName }}
      FILTER(ISIRI(?locatiepunt))
    }}
  }}
  UNION
  {{
    ?identifier a picom:PersonObservation ;
                prov:hadPrimarySource ?source ;
                sdo:familyName ?familyname ;
                sdo:givenName ?givenName;
                sdo:name ?naam . {search}
    ?source geo:hasGeometry ?locatiepunt {street_clause};
            sdo:isPartOf ?partof .
    OPTIONAL {{ ?identifier sdo:hasOccupation/o:label ?beroep }}
    OPTIONAL {{ ?identifier sdo:hasOccupation ?beroep }}
    OPTIONAL {{ ?partof rico:hasBeginningDate ?datering }} {period_clause}
    FILTER(ISIRI(?locatiepunt))
  }}
}} ORDER BY ?familyname ?givenName ?datering"#
  ))
}

/// Photo index by free-text description match.
pub fn photo_index_description(
  q: Option<&str>,
  street: Option<&Term>,
  period: Option<(i32, i32)>,
) -> SelectQuery {
  let search = q.map(|q| contains_filter("titel", q)).unwrap_or_default();
  let street_clause = street
    .map(|street| format!("BIND( {} AS ?straat) ", street))
    .unwrap_or_default();
  let period_clause = period.map(|range| period_filter("datering", range)).unwrap_or_default();
  let head = if street.is_none() && q.is_none() {
    values_clause("identifier", &FEATURED_PHOTOS)
  } else {
    String::new()
  };

  SelectQuery::new(format!(
    r#"
SELECT DISTINCT ?identifier ?titel ?url ?thumbnail ?straatnaam ?vervaardiger ?datering ?straat ?straatnaam ?locatiepunt WHERE {{
  {head} {street_clause}
  {{
    ?identifier sdo:spatialCoverage/gtm:straat ?straat ;
      sdo:name ?titel ;
      sdo:url ?url ;
      sdo:dateCreated/rico:hasBeginningDate/rico:normalizedDateValue ?datering ;
      sdo:spatialCoverage/sdo:geo/geo:hasGeometry/geo:asWKT ?WKT2 ;
      o:media/sdo:thumbnailUrl ?thumbnail .
    {search}{period_clause}
    OPTIONAL {{ ?identifier sdo:creator ?vervaardiger . }}
  }}
  {{
    ?locatiepunt a geo:Geometry ;
                 sdo:name ?name .
    ?perceel geo:hasGeometry ?locatiepunt ;
             geo:hasGeometry/geo:asWKT ?WKT1 .
    FILTER(STRSTARTS(STR(?WKT1),"POLYGON"))
  }}
  FILTER(geof:sfIntersects(?WKT1, ?WKT2))
  ?straat sdo:name ?straatnaam
}}
ORDER BY ASC(?datering) ?titel"#
  ))
}

/// Photo index variant for a location-point code (a free-text filter shaped
/// like `L123`).
pub fn photo_index_location(code: &str) -> SelectQuery {
  let search = contains_filter("name", code);

  SelectQuery::new(format!(
    r#"
SELECT DISTINCT ?identifier ?titel ?url ?thumbnail ?vervaardiger ?datering ?straat ?straatnaam ?locatiepunt WHERE  {{
  {{
    ?locatiepunt a geo:Geometry ;
                 sdo:name ?name .
    {search}
    ?perceel geo:hasGeometry ?locatiepunt ;
             geo:hasGeometry/geo:asWKT ?WKT1 .
    FILTER(STRSTARTS(STR(?WKT1),"POLYGON"))
  }}
  {{
    ?identifier sdo:spatialCoverage/sdo:geo/geo:hasGeometry/geo:asWKT ?WKT2 .
    FILTER(STRSTARTS(STR(?WKT2),"POLYGON"))
    ?identifier sdo:name ?titel ;
             sdo:url ?url ;
             o:media/sdo:thumbnailUrl ?thumbnail ;
             sdo:dateCreated/rico:hasBeginningDate/rico:normalizedDateValue ?datering .
    OPTIONAL {{
      ?identifier sdo:creator ?vervaardiger .
    }}
    OPTIONAL {{
      ?identifier sdo:spatialCoverage/sdo:geo/geo:hasGeometry/osm:area ?area
    }}
  }}
  FILTER(geof:sfIntersects(?WKT1, ?WKT2))
  {{
    ?identifier sdo:spatialCoverage/gtm:straat ?straat .
    ?straat sdo:name ?straatnaam .
  }}
}} ORDER BY ?area"#
  ))
}

/// Building stock for one year, with the address list concatenated per
/// location point.
pub fn buildings_in_year(year: i32) -> SelectQuery {
  let year = Term::literal(year.to_string());

  SelectQuery::new(format!(
    r#"
SELECT ?identifier ?geometry ?naam ?locatiepunt (GROUP_CONCAT(?adres ; separator="|") AS ?adressen) WHERE {{
  ?identifier a gtm:Pand ;
    sdo:name ?naam ;
    sdo:startDate ?startDate ;
    geo:hasGeometry/geo:asWKT ?geometry .
  OPTIONAL {{ ?identifier sdo:endDate ?endDate }}
  FILTER ( ?startDate <= {year} && (!BOUND(?endDate) || ?endDate >= {year}) )
  OPTIONAL {{
    ?identifier geo:hasGeometry ?locatiepunt .
    ?s geo:hasGeometry ?locatiepunt ;
      a ?type ;
      sdo:name ?adres .
    FILTER (?type IN (gtm:PlaatselijkeAanduiding, gtm:StraatNummerAanduiding, gtm:NummerAanduiding, gtm:Huisnaam))
    FILTER(ISIRI(?locatiepunt))
  }}
}} GROUP BY ?identifier ?geometry ?naam ?locatiepunt"#
  ))
}

/// Display name of a single location point.
pub fn building_name(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT ?naam WHERE {{
  {id}  sdo:name ?naam
}} "#
  ))
}

/// Everything known about one person observation, including its source
/// record.
pub fn person(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT * WHERE {{
  BIND({id} as ?pv)
  ?pv sdo:name ?name ;
      geo:hasGeometry ?locatiepunt .
  ?locatiepunt sdo:name ?locatiepuntnaam .
  OPTIONAL {{ ?pv gtm:straat/o:title ?locatiepuntnaam }}
  OPTIONAL {{ ?pv sdo:hasOccupation ?hasOccupation }}
  OPTIONAL {{ ?pv picom:hasAge ?hasAge }}
  OPTIONAL {{ ?pv sdo:birthDate ?birthDate }}
  OPTIONAL {{ ?pv sdo:birthPlace ?bp OPTIONAL {{ ?bp o:label ?bpLabel }} BIND(IF(isLiteral(?bp), ?bp, ?bpLabel) AS ?birthPlace) }}
  OPTIONAL {{ ?pv sdo:deathDate ?deathDate }}
  OPTIONAL {{ ?pv sdo:deathPlace ?dp  OPTIONAL {{ ?dp o:label ?dpLabel }} BIND(IF(isLiteral(?dp), ?dp, ?dpLabel) AS ?deathPlace) }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/sdo:isPartOf/rico:hasBeginningDate ?beginDate }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/rico:hasBeginningDate ?beginDate }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/sdo:isPartOf/rico:hasEndDate ?endDate }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/rico:hasEndDate ?endDate }}
  OPTIONAL {{ ?pv prov:hadPrimarySource ?snl . ?snl (sdo:name|o:label) ?bronNaam }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/sdo:isPartOf/rico:identifier ?_bronInventaris . BIND(CONCAT("SAMH ", STR(?_bronInventaris)) AS ?bronInventaris) }}
  OPTIONAL {{ ?pv prov:hadPrimarySource/rico:identifier ?_bronInventaris . BIND(CONCAT("SAMH ", STR(?_bronInventaris)) AS ?bronInventaris) }}
  OPTIONAL {{ ?pv sdo:isBasedOn ?bronUrl }}
  OPTIONAL {{ ?pv roar:documentedIn ?bronUrl }}
  OPTIONAL {{ ?pv prov:hadPrimarySource ?bronUrl }}
}}"#
  ))
}

/// Person observations attached to one location point, oldest first.
pub fn persons_at_location(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT ?identifier ?naam ?beroep ?datering WHERE {{
  ?identifier a picom:PersonObservation ;
      geo:hasGeometry {id} ;
      sdo:name ?naam .
  OPTIONAL {{ ?identifier sdo:hasOccupation ?beroep }}
  OPTIONAL {{ ?identifier sdo:datePublished ?datering }}
  OPTIONAL {{ ?identifier prov:hadPrimarySource/rico:hasBeginningDate ?datering }}
  OPTIONAL {{ ?identifier prov:hadPrimarySource/sdo:isPartOf/rico:hasBeginningDate ?datering }}
}} ORDER BY ASC(?datering)
"#
  ))
}

/// Photos whose footprint intersects the parcel of one location point.
pub fn photos_at_location(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT DISTINCT ?identifier ?titel ?thumbnail ?datering WHERE  {{
  {{
    ?s a gtm:Perceel ;
       geo:hasGeometry {id};
       geo:hasGeometry/geo:asWKT ?WKT1 .
  }}
  {{
    ?identifier sdo:spatialCoverage/sdo:geo/geo:hasGeometry/geo:asWKT ?WKT2 .
    ?identifier sdo:name ?titel ;
             sdo:url ?url ;
             sdo:dateCreated/rico:hasBeginningDate/rico:normalizedDateValue ?datering ;
             o:media/sdo:thumbnailUrl ?thumbnail .
    OPTIONAL {{
      ?identifier sdo:spatialCoverage/sdo:geo/geo:hasGeometry/<https://osm2rdf.cs.uni-freiburg.de/rdf#area> ?area
    }}
  }}
  FILTER(geof:sfIntersects(?WKT1, ?WKT2)).
}} ORDER BY ?datering ?area LIMIT 10"#
  ))
}

/// One photo with its streets and intersecting parcels.
pub fn photo(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT * WHERE {{
  BIND({id} as ?identifier)
  {{
    ?identifier sdo:spatialCoverage/gtm:straat ?straat ;
        sdo:name ?titel ;
        sdo:url ?url ;
        o:primary_media/o:source ?iiif_info_json ;
        sdo:url ?url ;
        sdo:spatialCoverage/sdo:geo/geo:hasGeometry/geo:asWKT ?WKT2 ;
        o:media/sdo:thumbnailUrl ?thumbnail .
    OPTIONAL {{ ?identifier sdo:creator ?vervaardiger }}
    OPTIONAL {{ ?identifier gtm:informatieAuteursRechten ?informatieAuteursRechten }}
    OPTIONAL {{ ?identifier sdo:dateCreated/rico:expressedDate ?datering }}
  }}
  {{
    ?locatiepunt a geo:Geometry ;
                 sdo:name ?name .
    ?perceel geo:hasGeometry ?locatiepunt ;
             geo:hasGeometry/geo:asWKT ?WKT1 .
    FILTER(STRSTARTS(STR(?WKT1),"POLYGON"))
  }}
  FILTER(geof:sfIntersects(?WKT1, ?WKT2))
  ?straat sdo:name ?straatnaam
}}"#
  ))
}

/// Ten photos closest to the given one.
pub fn photos_nearby(id: &Term) -> SelectQuery {
  SelectQuery::new(format!(
    r#"
SELECT * WHERE {{
  {id} sdo:spatialCoverage/sdo:geo/geo:hasGeometry/geo:asWKT ?WKT1 .
  ?identifier geo:hasGeometry/geo:asWKT ?WKT2 ;
              sdo:name ?titel ;
              o:media/sdo:thumbnailUrl ?thumbnail .
  BIND(geof:distance(?WKT1, ?WKT2) AS ?afstand)
}}
ORDER BY ASC(?afstand)
LIMIT 10"#
  ))
}

/// Address records attached to one location point, newest first.
pub fn addresses_at_location(id: &Term, limit: usize) -> SelectQuery {
  let limit_clause = if limit > 0 {
    format!(" LIMIT {}", limit)
  } else {
    String::new()
  };

  SelectQuery::new(format!(
    r#"
SELECT ?type ?naam ?startDate (COALESCE(?_endDate, "nu") AS ?endDate) ?wijknaam ?straaturi ?locatienaam WHERE {{
  ?uri geo:hasGeometry {id} ;
       a ?type ;
       sdo:startDate ?_startDate ;
       sdo:name ?naam ;
       gtm:straat ?straaturi .
  FILTER (?type IN (gtm:PlaatselijkeAanduiding, gtm:StraatNummerAanduiding, gtm:NummerAanduiding, gtm:Huisnaam))
  BIND(xsd:integer(SUBSTR(STR(?_startDate), 1, 4)) AS ?startDate)
  OPTIONAL {{ ?uri sdo:endDate ?_endDate }}
  OPTIONAL {{
    ?uri hg:liesIn ?wijk .
    ?wijk a gtm:Wijk ;
          sdo:name ?wijknaam
  }}
  {id} sdo:name ?locatienaam .
}} ORDER BY DESC(?startDate){limit_clause}"#
  ))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unfiltered_building_index_shows_featured_set() {
    let text = building_index(None, None).render(PREFIXES);
    assert!(text.contains("VALUES ?locatiepunt"));
    assert!(!text.contains("CONTAINS"));
  }

  #[test]
  fn search_term_replaces_featured_set() {
    let text = building_index(Some("Markt"), None).render(PREFIXES);
    assert!(!text.contains("VALUES ?locatiepunt"));
    assert!(text.contains(r#"FILTER(CONTAINS(LCASE(?naam), "markt"))"#));
  }

  #[test]
  fn street_filter_binds_the_street_variable() {
    let street = Term::iri("https://example.org/street/1").unwrap();
    let text = building_index(None, Some(&street)).render(PREFIXES);
    assert!(text.contains("BIND(<https://example.org/street/1> AS ?straat)"));
    assert!(!text.contains("VALUES ?locatiepunt"));
  }

  #[test]
  fn malicious_search_term_cannot_escape_the_literal() {
    let text = building_index(Some(r#"x")) . ?s ?p ?o . FILTER(("y"#), None).render(PREFIXES);
    assert!(text.contains(r#"LCASE(?naam), "x\")) . ?s ?p ?o . filter((\"y")"#));
  }

  #[test]
  fn person_index_applies_period_filter() {
    let text = person_index(Some("jan"), None, Some((1800, 1899))).render(PREFIXES);
    assert!(text.contains(r#"FILTER(?datering>="1800"^^xsd:gYear && ?datering<="1899"^^xsd:gYear )"#));
  }

  #[test]
  fn addresses_query_supports_a_limit() {
    let id = Term::iri("https://example.org/L1").unwrap();
    assert!(addresses_at_location(&id, 1).render(PREFIXES).ends_with("LIMIT 1"));
    assert!(!addresses_at_location(&id, 0).render(PREFIXES).contains("LIMIT"));
  }
}
