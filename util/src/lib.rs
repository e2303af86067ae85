//! Small helpers shared by the TV control client.
//!
//! Nothing in this crate talks to the device itself. These are the leaf
//! utilities the client builds on: readers for the loosely structured
//! device-info JSON and a bridge that lets synchronous call sites drive the
//! async client API.

pub mod blocking;
pub mod lookup;

pub use lookup::{get_case_insensitive, value_from_paths};
