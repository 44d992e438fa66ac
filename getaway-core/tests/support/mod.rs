//! Shared fixtures for ranking integration tests.

use getaway_core::PlaceRecord;

/// Build a record, panicking on invalid input.
pub fn place(
    name: &str,
    city: &str,
    state: &str,
    zone: &str,
    rating: f64,
    volume: f64,
) -> PlaceRecord {
    PlaceRecord::new(name, city, state, zone, rating, volume)
        .unwrap_or_else(|err| panic!("invalid test record {name}: {err}"))
}

/// A small slice of the Indian places dataset.
#[must_use]
pub fn sample_places() -> Vec<PlaceRecord> {
    vec![
        place("India Gate", "Delhi", "Delhi", "Northern", 4.6, 2.6),
        place("Red Fort", "Delhi", "Delhi", "Northern", 4.5, 1.6),
        place("Taj Mahal", "Agra", "Uttar Pradesh", "Northern", 4.6, 2.3),
        place("Varanasi Ghats", "Varanasi", "Uttar Pradesh", "Northern", 4.7, 0.9),
        place("Hawa Mahal", "Jaipur", "Rajasthan", "Northern", 4.4, 1.3),
        place("Gateway of India", "Mumbai", "Maharashtra", "Western", 4.6, 3.2),
        place("Shaniwar Wada", "Pune", "Maharashtra", "Western", 4.3, 0.6),
        place("Baga Beach", "Goa", "Goa", "Western", 4.4, 0.9),
        place("Marina Beach", "Chennai", "Tamil Nadu", "Southern", 4.4, 1.5),
        place("Victoria Memorial", "Kolkata", "West Bengal", "Eastern", 4.6, 1.1),
    ]
}
