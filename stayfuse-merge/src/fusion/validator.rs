//! Canonical record validation
//!
//! Checks a transformed candidate for mandatory-field completeness and
//! reports optional-field gaps. Rejection is a boolean signal, never an
//! error: the caller drops the record and keeps processing the batch.
//! Optional gaps are a warning side-channel only.
//!
//! Malformed input (a raw record that is not a key/value mapping at all) is a
//! distinct outcome surfaced by the transformer before validation runs; it is
//! never folded into the accept/reject boolean here.

use stayfuse_common::Hotel;
use tracing::{debug, warn};

/// Validation outcome for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Mandatory fields that are absent (empty means the record is accepted)
    pub missing: Vec<&'static str>,
    /// Optional fields with no usable content (reported, never rejected)
    pub gaps: Vec<&'static str>,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Validate one canonical candidate.
///
/// Mandatory: id, name, description, location (at least one populated
/// sub-field). The destination id carries the template default and is
/// type-correct by construction, so its check cannot fail here.
pub fn validate(hotel: &Hotel) -> ValidationOutcome {
    let mut missing = Vec::new();
    let mut gaps = Vec::new();

    if hotel.id.is_empty() {
        missing.push("id");
    }
    if hotel.name.is_empty() {
        missing.push("name");
    }
    if hotel.description.is_empty() {
        missing.push("description");
    }
    if hotel.location.is_empty() {
        missing.push("location");
    }

    if hotel.location.city.is_none() {
        gaps.push("city");
    }
    if hotel.location.lat.is_none() {
        gaps.push("latitude");
    }
    if hotel.location.lng.is_none() {
        gaps.push("longitude");
    }
    if hotel.amenities.total() == 0 {
        gaps.push("amenities");
    }
    if hotel.images.is_empty() {
        gaps.push("images");
    }
    if hotel.images.rooms.is_empty() {
        gaps.push("rooms");
    }
    if hotel.booking_conditions.is_empty() {
        gaps.push("booking_conditions");
    }

    if !missing.is_empty() {
        debug!(id = %hotel.id, missing = ?missing, "Candidate rejected");
    }
    for gap in &gaps {
        warn!(id = %hotel.id, field = gap, "Optional field has no content");
    }

    ValidationOutcome { missing, gaps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayfuse_common::DestinationId;

    fn complete_hotel() -> Hotel {
        let mut hotel = Hotel {
            id: "iJhz".to_string(),
            destination_id: DestinationId::Int(5432),
            name: "Beach Villas".to_string(),
            description: "Luxury rooms by the sea".to_string(),
            ..Default::default()
        };
        hotel.location.address = Some("8 Sentosa Gateway".to_string());
        hotel
    }

    #[test]
    fn test_complete_record_is_accepted() {
        let outcome = validate(&complete_hotel());
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_missing_id_rejects_even_when_rest_is_valid() {
        let mut hotel = complete_hotel();
        hotel.id.clear();
        let outcome = validate(&hotel);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.missing, vec!["id"]);
    }

    #[test]
    fn test_missing_location_rejects() {
        let mut hotel = complete_hotel();
        hotel.location = Default::default();
        assert!(!validate(&hotel).is_accepted());
    }

    #[test]
    fn test_empty_shape_reports_every_mandatory_field() {
        let outcome = validate(&Hotel::default());
        assert_eq!(outcome.missing, vec!["id", "name", "description", "location"]);
    }

    #[test]
    fn test_optional_gaps_do_not_reject() {
        let outcome = validate(&complete_hotel());
        assert!(outcome.is_accepted());
        // Only the address sub-field is set, so every optional check gaps
        assert!(outcome.gaps.contains(&"city"));
        assert!(outcome.gaps.contains(&"amenities"));
        assert!(outcome.gaps.contains(&"images"));
        assert!(outcome.gaps.contains(&"booking_conditions"));
    }

    #[test]
    fn test_populated_optionals_report_no_gap() {
        let mut hotel = complete_hotel();
        hotel.location.city = Some("Singapore".to_string());
        hotel.location.lat = Some(1.26);
        hotel.location.lng = Some(103.82);
        hotel.amenities.add_general("pool".to_string());
        hotel.images.add_room(stayfuse_common::ImageRef {
            link: "https://cdn.example/r1.jpg".to_string(),
            description: "Room".to_string(),
        });
        hotel.add_booking_condition("No pets".to_string());
        let outcome = validate(&hotel);
        assert!(outcome.gaps.is_empty());
    }
}
