//! Canonical hotel model
//!
//! One `Hotel` per property identity. Supplier records arrive with arbitrary
//! field names and nesting; the merge service normalizes them into this shape.
//!
//! Merge invariants carried by this module:
//! - List/set-shaped fields (`Amenities`, `Images`, `booking_conditions`) only
//!   grow: the `add_*` helpers append if absent and never remove.
//! - The relevance score is NOT part of this shape. The reconciliation store
//!   keeps it beside the record, so external reads are score-free by
//!   construction.

use serde::{Deserialize, Serialize};

/// Destination grouping key. Suppliers send either an integer or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DestinationId {
    Int(i64),
    Str(String),
}

impl Default for DestinationId {
    /// Template default, matching the canonical shape a merge starts from
    fn default() -> Self {
        DestinationId::Int(0)
    }
}

/// Structured location sub-record. Any subset of fields may be populated
/// across merges; absent fields are omitted from the serialized shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// True when no sub-field has been populated yet
    pub fn is_empty(&self) -> bool {
        self.lat.is_none()
            && self.lng.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }
}

/// Amenity buckets. Vectors with set semantics: insertion order is preserved
/// for determinism, duplicates are rejected on insert, entries never shrink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

impl Amenities {
    /// Append to the general bucket if not already present
    pub fn add_general(&mut self, amenity: String) {
        if !self.general.contains(&amenity) {
            self.general.push(amenity);
        }
    }

    /// Append to the room bucket if not already present
    pub fn add_room(&mut self, amenity: String) {
        if !self.room.contains(&amenity) {
            self.room.push(amenity);
        }
    }

    /// Count across both buckets (scoring input)
    pub fn total(&self) -> usize {
        self.general.len() + self.room.len()
    }
}

/// One image reference. Deduplicated by full `(link, description)` equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub link: String,
    pub description: String,
}

impl ImageRef {
    /// True when neither link nor description was resolved from the source
    pub fn is_empty(&self) -> bool {
        self.link.is_empty() && self.description.is_empty()
    }
}

/// Image references per category. Append-only across merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub rooms: Vec<ImageRef>,
    pub site: Vec<ImageRef>,
    pub amenities: Vec<ImageRef>,
}

impl Images {
    pub fn add_room(&mut self, image: ImageRef) {
        push_unique(&mut self.rooms, image);
    }

    pub fn add_site(&mut self, image: ImageRef) {
        push_unique(&mut self.site, image);
    }

    pub fn add_amenity(&mut self, image: ImageRef) {
        push_unique(&mut self.amenities, image);
    }

    /// True when no category holds any image (scoring penalty case)
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.site.is_empty() && self.amenities.is_empty()
    }
}

fn push_unique(images: &mut Vec<ImageRef>, image: ImageRef) {
    if !image.is_empty() && !images.contains(&image) {
        images.push(image);
    }
}

/// The canonical, deduplicated representation of one hotel.
///
/// Created when the first valid supplier contribution for an id is
/// transformed, mutated in place by every later contribution for the same id,
/// never deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    /// Primary identity. Immutable once assigned, never empty in a valid record.
    pub id: String,
    /// Grouping key for the hotel's broader location group
    pub destination_id: DestinationId,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: Vec<String>,
}

impl Hotel {
    /// Append a booking condition if not already present (set semantics over
    /// an ordered sequence)
    pub fn add_booking_condition(&mut self, condition: String) {
        if !self.booking_conditions.contains(&condition) {
            self.booking_conditions.push(condition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenities_union_rejects_duplicates() {
        let mut amenities = Amenities::default();
        amenities.add_general("pool".to_string());
        amenities.add_general("wifi".to_string());
        amenities.add_general("pool".to_string());
        assert_eq!(amenities.general, vec!["pool", "wifi"]);
        assert_eq!(amenities.total(), 2);
    }

    #[test]
    fn test_amenities_buckets_are_independent() {
        let mut amenities = Amenities::default();
        amenities.add_general("tv".to_string());
        amenities.add_room("tv".to_string());
        assert_eq!(amenities.total(), 2);
    }

    #[test]
    fn test_images_deduplicate_by_full_equality() {
        let mut images = Images::default();
        let image = ImageRef {
            link: "https://cdn.example/1.jpg".to_string(),
            description: "Lobby".to_string(),
        };
        images.add_site(image.clone());
        images.add_site(image.clone());
        // Same link, different description is a distinct reference
        images.add_site(ImageRef {
            link: "https://cdn.example/1.jpg".to_string(),
            description: "Entrance".to_string(),
        });
        assert_eq!(images.site.len(), 2);
    }

    #[test]
    fn test_images_skip_empty_refs() {
        let mut images = Images::default();
        images.add_room(ImageRef::default());
        assert!(images.is_empty());
    }

    #[test]
    fn test_booking_conditions_keep_order_and_uniqueness() {
        let mut hotel = Hotel::default();
        hotel.add_booking_condition("No pets".to_string());
        hotel.add_booking_condition("No smoking".to_string());
        hotel.add_booking_condition("No pets".to_string());
        assert_eq!(hotel.booking_conditions, vec!["No pets", "No smoking"]);
    }

    #[test]
    fn test_destination_id_deserializes_both_shapes() {
        let int: DestinationId = serde_json::from_str("5432").unwrap();
        let text: DestinationId = serde_json::from_str("\"5432\"").unwrap();
        assert_eq!(int, DestinationId::Int(5432));
        assert_eq!(text, DestinationId::Str("5432".to_string()));
    }

    #[test]
    fn test_hotel_serializes_without_score_field() {
        let hotel = Hotel {
            id: "iJhz".to_string(),
            destination_id: DestinationId::Int(5432),
            name: "Beach Villas".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&hotel).unwrap();
        assert!(value.get("score").is_none());
        assert_eq!(value["id"], "iJhz");
        assert_eq!(value["destination_id"], 5432);
    }

    #[test]
    fn test_empty_shape_defaults() {
        let hotel = Hotel::default();
        assert_eq!(hotel.destination_id, DestinationId::Int(0));
        assert!(hotel.location.is_empty());
        assert!(hotel.images.is_empty());
    }
}
