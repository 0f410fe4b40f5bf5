//! Supplier field-name alias resolution
//!
//! Each supplier names the same field differently (`"Name"`, `"hotel_name"`,
//! `"HotelName"`, ...). The alias tables below map every accepted source name
//! to one canonical field. Lookup is exact-match and case-sensitive; there is
//! no fuzzy matching. An alias listed under two canonical names is a
//! configuration error, caught by the table-consistency test at the bottom of
//! this file rather than at runtime.

/// Canonical field a supplier key can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalField {
    Id,
    DestinationId,
    Name,
    Description,
    Location,
    Address,
    City,
    Country,
    Latitude,
    Longitude,
    Amenities,
    Images,
    Rooms,
    BookingConditions,
}

/// Amenity bucket a nested amenities key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityBucket {
    General,
    Room,
}

/// Image category a nested images key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Site,
    Amenities,
    Rooms,
}

pub const HOTEL_ID: &[&str] = &["id", "Id", "hotel_id", "HotelId"];
pub const DESTINATION_ID: &[&str] = &["destination", "DestinationId", "destination_id"];
pub const HOTEL_NAME: &[&str] = &["name", "Name", "hotel_name", "HotelName"];
pub const DESCRIPTION: &[&str] = &["description", "Description", "info", "details", "caption"];
pub const LOCATION: &[&str] = &["location", "Location"];
pub const ADDRESS: &[&str] = &["address", "Address"];
pub const CITY: &[&str] = &["city", "City"];
pub const COUNTRY: &[&str] = &["country", "Country"];
pub const LATITUDE: &[&str] = &["latitude", "Latitude", "lat"];
pub const LONGITUDE: &[&str] = &["longitude", "Longitude", "lng"];
pub const AMENITIES: &[&str] = &["facilities", "Facilities", "Amenities", "amenities"];
pub const IMAGES: &[&str] = &["images", "Images", "Pics", "pics"];
pub const ROOMS: &[&str] = &["Rooms", "rooms", "suite"];
pub const BOOKING_CONDITIONS: &[&str] = &["booking_conditions", "Booking conditions"];

/// Nested amenities keys
pub const AMENITY_GENERAL: &[&str] = &["general", "General"];
pub const AMENITY_ROOM: &[&str] = &["room", "rooms", "Room", "Rooms"];

/// Nested images keys
pub const IMAGE_SITE: &[&str] = &["site", "Site"];
pub const IMAGE_AMENITIES: &[&str] = &["Amenities", "amenities"];
pub const IMAGE_LINK: &[&str] = &["link", "Link", "url", "URL"];

/// Top-level alias tables, one per canonical field
const TABLES: &[(CanonicalField, &[&str])] = &[
    (CanonicalField::Id, HOTEL_ID),
    (CanonicalField::DestinationId, DESTINATION_ID),
    (CanonicalField::Name, HOTEL_NAME),
    (CanonicalField::Description, DESCRIPTION),
    (CanonicalField::Location, LOCATION),
    (CanonicalField::Address, ADDRESS),
    (CanonicalField::City, CITY),
    (CanonicalField::Country, COUNTRY),
    (CanonicalField::Latitude, LATITUDE),
    (CanonicalField::Longitude, LONGITUDE),
    (CanonicalField::Amenities, AMENITIES),
    (CanonicalField::Images, IMAGES),
    (CanonicalField::Rooms, ROOMS),
    (CanonicalField::BookingConditions, BOOKING_CONDITIONS),
];

const BUCKET_TABLES: &[(AmenityBucket, &[&str])] = &[
    (AmenityBucket::General, AMENITY_GENERAL),
    (AmenityBucket::Room, AMENITY_ROOM),
];

const CATEGORY_TABLES: &[(ImageCategory, &[&str])] = &[
    (ImageCategory::Site, IMAGE_SITE),
    (ImageCategory::Amenities, IMAGE_AMENITIES),
    (ImageCategory::Rooms, ROOMS),
];

/// Resolve a supplier field name to its canonical field, if recognized
pub fn resolve(raw: &str) -> Option<CanonicalField> {
    TABLES
        .iter()
        .find(|(_, aliases)| aliases.contains(&raw))
        .map(|(field, _)| *field)
}

/// Resolve a nested amenities key to its bucket
pub fn amenity_bucket(raw: &str) -> Option<AmenityBucket> {
    BUCKET_TABLES
        .iter()
        .find(|(_, aliases)| aliases.contains(&raw))
        .map(|(bucket, _)| *bucket)
}

/// Resolve a nested images key to its category
pub fn image_category(raw: &str) -> Option<ImageCategory> {
    CATEGORY_TABLES
        .iter()
        .find(|(_, aliases)| aliases.contains(&raw))
        .map(|(category, _)| *category)
}

/// True when a nested image-entry key carries the link
pub fn is_image_link_key(raw: &str) -> bool {
    IMAGE_LINK.contains(&raw)
}

/// True when a nested image-entry key carries the caption
pub fn is_image_description_key(raw: &str) -> bool {
    DESCRIPTION.contains(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// An alias listed under two canonical names makes resolution undefined.
    /// Catch the misconfiguration here instead of at runtime.
    #[test]
    fn test_top_level_tables_are_consistent() {
        let mut seen: HashMap<&str, CanonicalField> = HashMap::new();
        for (field, aliases) in TABLES {
            for alias in *aliases {
                if let Some(previous) = seen.insert(alias, *field) {
                    panic!("alias {alias:?} listed under both {previous:?} and {field:?}");
                }
            }
        }
    }

    #[test]
    fn test_amenity_bucket_tables_are_consistent() {
        let mut seen: HashMap<&str, AmenityBucket> = HashMap::new();
        for (bucket, aliases) in BUCKET_TABLES {
            for alias in *aliases {
                if let Some(previous) = seen.insert(alias, *bucket) {
                    panic!("alias {alias:?} listed under both {previous:?} and {bucket:?}");
                }
            }
        }
    }

    #[test]
    fn test_image_category_tables_are_consistent() {
        let mut seen: HashMap<&str, ImageCategory> = HashMap::new();
        for (category, aliases) in CATEGORY_TABLES {
            for alias in *aliases {
                if let Some(previous) = seen.insert(alias, *category) {
                    panic!("alias {alias:?} listed under both {previous:?} and {category:?}");
                }
            }
        }
    }

    #[test]
    fn test_resolve_known_aliases() {
        assert_eq!(resolve("HotelId"), Some(CanonicalField::Id));
        assert_eq!(resolve("hotel_name"), Some(CanonicalField::Name));
        assert_eq!(resolve("info"), Some(CanonicalField::Description));
        assert_eq!(resolve("Facilities"), Some(CanonicalField::Amenities));
        assert_eq!(resolve("Pics"), Some(CanonicalField::Images));
        assert_eq!(resolve("Booking conditions"), Some(CanonicalField::BookingConditions));
    }

    #[test]
    fn test_resolve_is_case_sensitive_and_exact() {
        assert_eq!(resolve("HOTEL_NAME"), None);
        assert_eq!(resolve("name "), None);
        assert_eq!(resolve("unknown_field"), None);
    }

    #[test]
    fn test_nested_key_resolution() {
        assert_eq!(amenity_bucket("General"), Some(AmenityBucket::General));
        assert_eq!(amenity_bucket("Rooms"), Some(AmenityBucket::Room));
        assert_eq!(image_category("suite"), Some(ImageCategory::Rooms));
        assert_eq!(image_category("Site"), Some(ImageCategory::Site));
        assert!(is_image_link_key("url"));
        assert!(is_image_description_key("caption"));
    }
}
