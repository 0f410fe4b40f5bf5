//! Schema Transformer
//!
//! Builds canonical hotel candidates from a batch of raw supplier records.
//!
//! Per raw record:
//! 1. Determine identity by scanning the record for any id alias. Seed the
//!    merge target from the candidate already folded for that id in this
//!    batch, else from the store's authoritative record, else from the empty
//!    canonical shape.
//! 2. For each (field, value) pair: resolve the canonical field name, sanitize
//!    the value, skip empties (never overwrite with emptiness), and dispatch
//!    to the field-specific updater. Scalars overwrite; amenities, images,
//!    and booking conditions union without duplicates.
//! 3. Records sharing one identity within a batch fold sequentially in batch
//!    order into a single candidate, so later entries see the accumulated
//!    effect of earlier ones.
//!
//! A raw record that is not a JSON object is malformed input: fatal to that
//! record, counted, and the batch continues.

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

use stayfuse_common::{Amenities, DestinationId, Hotel, ImageRef, Images, Location};

use super::aliases::{self, AmenityBucket, CanonicalField, ImageCategory};
use super::sanitize::{is_empty, sanitize};
use crate::store::HotelStore;

/// Result of transforming one batch
#[derive(Debug, Default)]
pub struct TransformOutput {
    /// One candidate per identity (plus one per identity-less record),
    /// in first-seen batch order
    pub candidates: Vec<Hotel>,
    /// Raw records that were not structured key/value mappings
    pub malformed: usize,
}

/// Schema Transformer
///
/// Holds a read path into the reconciliation store so contributions for an
/// already-known identity merge onto the stored record instead of starting
/// fresh.
pub struct SchemaTransformer {
    store: HotelStore,
}

impl SchemaTransformer {
    pub fn new(store: HotelStore) -> Self {
        Self { store }
    }

    /// Transform a batch of raw supplier records into canonical candidates
    pub fn transform(&self, batch: &[Value]) -> TransformOutput {
        let mut output = TransformOutput::default();
        let mut slot_by_id: HashMap<String, usize> = HashMap::new();

        for raw in batch {
            let Some(record) = raw.as_object() else {
                warn!("supplier record is not a structured mapping; skipping");
                output.malformed += 1;
                continue;
            };

            let identity = identity_of(record);
            let slot = identity
                .as_ref()
                .and_then(|id| slot_by_id.get(id).copied());

            // Seed: in-batch accumulator, then stored record, then empty shape
            let mut hotel = match slot {
                Some(index) => output.candidates[index].clone(),
                None => identity
                    .as_ref()
                    .and_then(|id| self.store.get(id))
                    .unwrap_or_default(),
            };

            self.apply_record(&mut hotel, record);

            match slot {
                Some(index) => output.candidates[index] = hotel,
                None => {
                    if let Some(id) = identity {
                        slot_by_id.insert(id, output.candidates.len());
                    }
                    output.candidates.push(hotel);
                }
            }
        }

        debug!(
            records = batch.len(),
            candidates = output.candidates.len(),
            malformed = output.malformed,
            "Batch transformed"
        );

        output
    }

    /// Fold one raw record into the merge target
    fn apply_record(&self, hotel: &mut Hotel, record: &Map<String, Value>) {
        for (key, value) in record {
            let value = sanitize(value.clone());
            if is_empty(&value) {
                continue;
            }

            let Some(field) = aliases::resolve(key) else {
                debug!(field = %key, "unrecognized supplier field");
                continue;
            };

            match field {
                CanonicalField::Id => {
                    if let Value::String(s) = &value {
                        hotel.id = s.clone();
                    }
                }
                CanonicalField::DestinationId => match &value {
                    Value::Number(n) => {
                        if let Some(i) = n.as_i64() {
                            hotel.destination_id = DestinationId::Int(i);
                        }
                    }
                    Value::String(s) => {
                        hotel.destination_id = DestinationId::Str(s.clone());
                    }
                    _ => {}
                },
                CanonicalField::Name => {
                    if let Value::String(s) = &value {
                        hotel.name = s.clone();
                    }
                }
                CanonicalField::Description => {
                    if let Value::String(s) = &value {
                        hotel.description = s.clone();
                    }
                }
                CanonicalField::Location
                | CanonicalField::Address
                | CanonicalField::City
                | CanonicalField::Country
                | CanonicalField::Latitude
                | CanonicalField::Longitude => {
                    merge_location(&mut hotel.location, field, &value);
                }
                CanonicalField::Amenities => merge_amenities(&mut hotel.amenities, &value),
                CanonicalField::Images => merge_images(&mut hotel.images, &value),
                // Room details only arrive nested under the images field;
                // a top-level rooms value has no canonical destination
                CanonicalField::Rooms => {}
                CanonicalField::BookingConditions => merge_booking_conditions(hotel, &value),
            }
        }
    }
}

/// First non-empty value under any id alias, scanned in alias-table order
fn identity_of(record: &Map<String, Value>) -> Option<String> {
    aliases::HOTEL_ID.iter().find_map(|key| {
        record
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    })
}

/// Merge a location-like value. Structured values merge sub-field by
/// sub-field; a scalar is wrapped under the specific sub-field being set.
fn merge_location(location: &mut Location, field: CanonicalField, value: &Value) {
    match value {
        Value::Object(fields) => {
            for (key, sub_value) in fields {
                if let Some(sub_field) = aliases::resolve(key) {
                    set_location_scalar(location, sub_field, sub_value);
                }
            }
        }
        scalar => set_location_scalar(location, field, scalar),
    }
}

fn set_location_scalar(location: &mut Location, field: CanonicalField, value: &Value) {
    match field {
        // A bare string under the whole-location name can only describe the
        // address sub-field
        CanonicalField::Address | CanonicalField::Location => {
            if let Some(s) = non_empty_str(value) {
                location.address = Some(s);
            }
        }
        CanonicalField::City => {
            if let Some(s) = non_empty_str(value) {
                location.city = Some(s);
            }
        }
        CanonicalField::Country => {
            if let Some(s) = non_empty_str(value) {
                location.country = Some(s);
            }
        }
        CanonicalField::Latitude => {
            if let Some(n) = value.as_f64() {
                location.lat = Some(n);
            }
        }
        CanonicalField::Longitude => {
            if let Some(n) = value.as_f64() {
                location.lng = Some(n);
            }
        }
        _ => {}
    }
}

/// Union amenity entries into their buckets. An unstructured value lands in
/// the general bucket.
fn merge_amenities(amenities: &mut Amenities, value: &Value) {
    match value {
        Value::Object(buckets) => {
            for (key, entries) in buckets {
                let Some(bucket) = aliases::amenity_bucket(key) else {
                    continue;
                };
                let Value::Array(entries) = entries else {
                    continue;
                };
                for entry in entries {
                    let Some(amenity) = non_empty_str(entry) else {
                        continue;
                    };
                    match bucket {
                        AmenityBucket::General => amenities.add_general(amenity),
                        AmenityBucket::Room => amenities.add_room(amenity),
                    }
                }
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                if let Some(amenity) = non_empty_str(entry) {
                    amenities.add_general(amenity);
                }
            }
        }
        Value::String(s) => amenities.add_general(s.clone()),
        _ => {}
    }
}

/// Append image references per category, deduplicated by full equality
fn merge_images(images: &mut Images, value: &Value) {
    let Value::Object(categories) = value else {
        debug!("images value is not structured; skipping");
        return;
    };

    for (key, entries) in categories {
        let Some(category) = aliases::image_category(key) else {
            continue;
        };
        let Value::Array(entries) = entries else {
            continue;
        };
        for entry in entries {
            let Value::Object(fields) = entry else {
                continue;
            };

            let mut image = ImageRef::default();
            for (field_key, field_value) in fields {
                let Some(s) = non_empty_str(field_value) else {
                    continue;
                };
                if aliases::is_image_link_key(field_key) {
                    image.link = s;
                } else if aliases::is_image_description_key(field_key) {
                    image.description = s;
                }
            }

            match category {
                ImageCategory::Site => images.add_site(image),
                ImageCategory::Amenities => images.add_amenity(image),
                ImageCategory::Rooms => images.add_room(image),
            }
        }
    }
}

/// Append conditions not already present (set semantics over an ordered
/// sequence)
fn merge_booking_conditions(hotel: &mut Hotel, value: &Value) {
    match value {
        Value::Array(conditions) => {
            for condition in conditions {
                if let Some(s) = non_empty_str(condition) {
                    hotel.add_booking_condition(s);
                }
            }
        }
        Value::String(s) => hotel.add_booking_condition(s.clone()),
        _ => {}
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}
