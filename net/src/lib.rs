//! Networking helpers for reaching the TV.
//!
//! This crate keeps raw socket concerns out of the client. Today that is a
//! single reachability probe, used to tell whether a device is powered on
//! and listening before any control traffic is attempted.

pub mod probe;

pub use probe::port_open;
