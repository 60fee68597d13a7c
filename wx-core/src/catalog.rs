//! Built-in table of forecast locations and name resolution.

use thiserror::Error;

use crate::model::{Coordinates, Location};

static LOCATIONS: &[Location] = &[
    Location {
        name: "death valley",
        coordinates: Coordinates::new(36.45699, -116.86393),
        elevation: -287,
    },
    Location {
        name: "castle valley",
        coordinates: Coordinates::new(38.6487, -109.42783),
        elevation: 4600,
    },
    Location {
        name: "fishlake",
        coordinates: Coordinates::new(38.81719, -111.53427),
        elevation: 7000,
    },
    Location {
        name: "soldiers summit",
        coordinates: Coordinates::new(39.92366, -111.06842),
        elevation: 7400,
    },
    Location {
        name: "phantom ranch",
        coordinates: Coordinates::new(36.09933, -112.09297),
        elevation: 2458,
    },
    Location {
        name: "lees ferry",
        coordinates: Coordinates::new(36.86595, -111.5871),
        elevation: 3129,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Carries the normalized name, not the raw input.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

/// All catalog entries, in display order.
pub fn all() -> &'static [Location] {
    LOCATIONS
}

pub fn names() -> impl Iterator<Item = &'static str> {
    LOCATIONS.iter().map(|loc| loc.name)
}

/// Lowercase and trim, the same way catalog keys are stored.
pub fn normalize_location(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn find(raw: &str) -> Option<&'static Location> {
    let name = normalize_location(raw);
    LOCATIONS.iter().find(|loc| loc.name == name)
}

/// Resolve a user-supplied name to the catalog's coordinates.
pub fn resolve(raw: &str) -> Result<Coordinates, ResolveError> {
    find(raw)
        .map(|loc| loc.coordinates)
        .ok_or_else(|| ResolveError::UnknownLocation(normalize_location(raw)))
}
