//! Planning pipeline for bulk delete-metadata instructions.
//!
//! Data flows strictly forward: raw identifiers → grouped/sorted serials
//! ([`aggregate`]) → per-token contiguous ranges ([`intervals`]) →
//! capacity-bounded bulks ([`pack`]). No stage depends on a later one, and
//! every stage is a pure function of its input.

pub mod aggregate;
pub mod identifier;
pub mod intervals;
pub mod pack;

pub use aggregate::group_serials;
pub use identifier::parse_identifier;
pub use intervals::compress_serials;
pub use pack::{NullObserver, PackObserver, pack, pack_with_observer};
