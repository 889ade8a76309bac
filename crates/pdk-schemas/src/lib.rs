//! Wire and domain types for the ParcelDesk admin API.
//!
//! These types are `Serialize + Deserialize` mirrors of the upstream REST
//! payloads. No business logic lives here; lifecycle rules are in
//! `pdk-lifecycle`, validation in `pdk-client`.
//!
//! Conventions of the upstream API carried through verbatim: camelCase
//! fields, MongoDB-style `_id` string identifiers, SCREAMING_SNAKE_CASE
//! status enums, ISO-8601 UTC timestamps.

pub mod account;
pub mod envelope;
pub mod notification;
pub mod order;
pub mod store;
pub mod zone;

pub use account::*;
pub use envelope::*;
pub use notification::*;
pub use order::*;
pub use store::*;
pub use zone::*;
