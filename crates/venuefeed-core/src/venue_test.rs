use serde_json::json;

use super::*;

fn ashton_json() -> serde_json::Value {
    json!({
        "name": "The Ashton Building Cafe",
        "building": "Ashton Building",
        "lat": "53.406566",
        "lon": "-2.966531",
        "description": "Coffee and sandwiches.",
        "opening_times": ["Mon 08:30-16:00", "Tue 08:30-16:00"],
        "amenities": ["wifi", "vegan options"],
        "photos": ["ashton1.jpg"],
        "URL": "https://www.liverpool.ac.uk/ashton",
        "last_modified": "2023-11-02 14:11:05"
    })
}

#[test]
fn deserializes_feed_field_names() {
    let venue: RawVenue = serde_json::from_value(ashton_json()).unwrap();
    assert_eq!(venue.name, "The Ashton Building Cafe");
    assert_eq!(venue.latitude, "53.406566");
    assert_eq!(venue.longitude, "-2.966531");
    assert_eq!(venue.opening_times, vec!["Mon 08:30-16:00", "Tue 08:30-16:00"]);
    assert_eq!(
        venue.website.as_deref(),
        Some("https://www.liverpool.ac.uk/ashton")
    );
    assert_eq!(venue.last_modified.as_deref(), Some("2023-11-02 14:11:05"));
}

#[test]
fn optional_fields_may_be_absent() {
    let venue: RawVenue = serde_json::from_value(json!({
        "name": "Pop-up Stall",
        "lat": "53.40",
        "lon": "-2.97",
        "opening_times": []
    }))
    .unwrap();
    assert!(venue.amenities.is_none());
    assert!(venue.photos.is_none());
    assert!(venue.website.is_none());
    assert_eq!(venue.building, "");
}

#[test]
fn numeric_coordinates_are_kept_as_text() {
    let venue: RawVenue = serde_json::from_value(json!({
        "name": "Numbers Cafe",
        "lat": 53.4,
        "lon": -2.97
    }))
    .unwrap();
    assert_eq!(venue.latitude, "53.4");
    assert_eq!(venue.longitude, "-2.97");
    assert!(venue.coordinates().is_some());
}

#[test]
fn unusable_coordinate_values_become_invalid_text() {
    let venues: Vec<RawVenue> = serde_json::from_value(json!([
        ashton_json(),
        { "name": "Null Cafe", "lat": null, "lon": null },
        { "name": "Odd Cafe", "lat": true, "lon": { "deg": -2.9 } }
    ]))
    .unwrap();

    assert_eq!(venues.len(), 3);
    assert!(venues[0].coordinates().is_some());
    for venue in &venues[1..] {
        assert_eq!(venue.latitude, "");
        assert_eq!(venue.longitude, "");
        assert!(venue.coordinates().is_none());
    }
}

#[test]
fn missing_name_is_rejected() {
    let result = serde_json::from_value::<RawVenue>(json!({"lat": "1", "lon": "2"}));
    assert!(result.is_err());
}

#[test]
fn serialization_round_trips_unchanged() {
    let original = ashton_json();
    let venue: RawVenue = serde_json::from_value(original.clone()).unwrap();
    let back = serde_json::to_value(&venue).unwrap();
    assert_eq!(back, original);
}

#[test]
fn from_raw_carries_status_and_no_distance() {
    let raw: RawVenue = serde_json::from_value(ashton_json()).unwrap();
    let venue = Venue::from_raw(&raw, VenueStatus::Favorite);
    assert_eq!(venue.status, VenueStatus::Favorite);
    assert!(venue.distance_meters.is_none());
    assert!(venue.coordinates.is_some());
}

#[test]
fn from_raw_marks_bad_coordinates_as_none() {
    let mut raw: RawVenue = serde_json::from_value(ashton_json()).unwrap();
    raw.latitude = "bad".to_string();
    let venue = Venue::from_raw(&raw, VenueStatus::Normal);
    assert!(venue.coordinates.is_none());
}
