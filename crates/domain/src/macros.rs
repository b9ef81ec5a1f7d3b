//! Macro for implementing Display, FromStr and `as_str` for wire enums
//!
//! The gateway encodes most closed value sets (presence, participant actions,
//! call types, privacy levels) as short lowercase strings. This macro keeps
//! the enum ↔ string mapping in a single table so the serde representation,
//! `Display` and `FromStr` never drift apart.
//!
//! # Example
//!
//! ```rust
//! use evolution_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Presence {
//!     Available,
//!     Unavailable,
//! }
//!
//! impl_wire_enum_conversions!(Presence {
//!     Available => "available",
//!     Unavailable => "unavailable",
//! });
//!
//! assert_eq!(Presence::Available.as_str(), "available");
//! ```

/// Implements `as_str`, Display and FromStr for wire enums
///
/// This macro generates:
/// - `as_str()`: the exact string sent to the gateway
/// - Display trait: writes `as_str()`
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// The mapped strings must be lowercase; parsing lowercases its input before
/// matching.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
