//! Type-safe identifier wrappers around `u64`.
//!
//! Players and rosters are keyed by opaque unsigned integers generated by
//! the store. Wrapping them prevents passing a roster id where a player id
//! is expected. On the wire both encode as bare JSON numbers.
//!
//! The value `0` is the "unset" id: the store never generates it, and sparse
//! updates treat it as "leave unchanged".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u64);

        impl $name {
            /// Return the inner `u64` value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }

            /// Whether this is the unset (zero) id.
            pub const fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a player, generated by the store on insert.
    PlayerId
}

define_id! {
    /// Unique identifier for a roster.
    RosterId
}
