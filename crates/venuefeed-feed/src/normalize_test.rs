use super::*;

fn make_venue(name: &str) -> RawVenue {
    RawVenue {
        name: name.to_owned(),
        building: "Central Teaching Hub".to_owned(),
        latitude: "53.4055".to_owned(),
        longitude: "-2.9653".to_owned(),
        description: "Hot food and drinks.".to_owned(),
        opening_times: vec!["Mon 09:00-17:00".to_owned()],
        amenities: None,
        photos: None,
        website: Some("https://www.liverpool.ac.uk/cth".to_owned()),
        last_modified: None,
    }
}

#[test]
fn normalize_venues_preserves_order() {
    let venues = vec![make_venue("B"), make_venue("A"), make_venue("C")];
    let names: Vec<String> = normalize_venues(venues)
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn normalize_venues_drops_blank_names() {
    let venues = vec![make_venue("  "), make_venue("Kept")];
    let normalized = normalize_venues(venues);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].name, "Kept");
}

#[test]
fn normalize_venues_trims_names() {
    let normalized = normalize_venues(vec![make_venue("  Sydney Jones Cafe ")]);
    assert_eq!(normalized[0].name, "Sydney Jones Cafe");
}

#[test]
fn normalize_venues_keeps_duplicates() {
    let normalized = normalize_venues(vec![make_venue("Twin"), make_venue("Twin")]);
    assert_eq!(normalized.len(), 2);
}

#[test]
fn normalize_venues_clears_invalid_url() {
    let mut venue = make_venue("Bad Link");
    venue.website = Some("not a url".to_owned());
    let normalized = normalize_venues(vec![venue]);
    assert!(normalized[0].website.is_none());
}

#[test]
fn normalize_venues_clears_non_http_url() {
    let mut venue = make_venue("Mail Link");
    venue.website = Some("mailto:food@example.ac.uk".to_owned());
    let normalized = normalize_venues(vec![venue]);
    assert!(normalized[0].website.is_none());
}

#[test]
fn normalize_venues_keeps_valid_url() {
    let normalized = normalize_venues(vec![make_venue("Good Link")]);
    assert_eq!(
        normalized[0].website.as_deref(),
        Some("https://www.liverpool.ac.uk/cth")
    );
}

#[test]
fn normalize_venues_leaves_bad_coordinates_alone() {
    let mut venue = make_venue("Nowhere");
    venue.latitude = "bad".to_owned();
    let normalized = normalize_venues(vec![venue]);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].latitude, "bad");
}
