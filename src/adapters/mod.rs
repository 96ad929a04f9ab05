//! Optional drawing backends.
//!
//! Enable feature flags (e.g. `plotters`) to add `Surface` impls for
//! external drawing libraries.

#[cfg(feature = "plotters")]
pub mod plotters;
