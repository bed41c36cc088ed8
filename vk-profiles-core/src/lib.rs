/*! This library simulates Vulkan capability profiles on top of a native
 *  device.
 *
 *  A profiles document describes the features, limits, extensions, formats and
 *  queue families a class of devices is guaranteed to have. [`Simulation`]
 *  answers capability queries the way a device conforming to the requested
 *  profiles would, by merging what the profiles declare with what the native
 *  device reports.
 */

#![allow(
    // It is much clearer to assert negative conditions with eq! false
    clippy::bool_assert_comparison,
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
    // Redundant matching is more explicit.
    clippy::redundant_pattern_matching,
    // Explicit lifetimes are often easier to reason about.
    clippy::needless_lifetimes,
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_op_in_unsafe_fn,
    unused_extern_crates,
)]

mod chain;
pub mod compliance;
pub mod config;
mod device;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod selector;
pub mod session;

pub use chain::Chain;
pub use compliance::{ComplianceReport, Incompatibility};
pub use config::{ConfigError, SimulationConfig};
pub use device::NativeDevice;
pub use dispatch::Simulation;
pub use document::{Profile, ProfileDocument, SchemaViolation};
pub use error::SimulationError;
pub use selector::ForceDevice;
pub use session::SessionSlot;

pub use vpt;
