//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the directory has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time -- a show references
//! both a venue and an artist, and swapping those two columns must not
//! typecheck.
//!
//! PostgreSQL generates IDs via `DEFAULT gen_random_uuid()` on insert.
//! The `new()` constructors here exist for cases where app-side generation
//! is needed (e.g. tests, seed data).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl core::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Uuid>().map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a venue.
    VenueId
}

define_id! {
    /// Unique identifier for an artist.
    ArtistId
}

define_id! {
    /// Unique identifier for a show (a venue/artist booking at a time).
    ShowId
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn ids_round_trip_through_display_and_parse() {
        let id = VenueId::new();
        let parsed: VenueId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn ids_convert_to_and_from_uuid() {
        let raw = Uuid::now_v7();
        let id = ArtistId::from(raw);
        assert_eq!(id.into_inner(), raw);
        assert_eq!(Uuid::from(id), raw);
    }

    #[test]
    fn invalid_id_string_is_rejected() {
        assert!("not-a-uuid".parse::<ShowId>().is_err());
    }
}
