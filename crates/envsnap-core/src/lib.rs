//! Immutable point-in-time snapshots of the runtime environment.
//!
//! An [`EnvironmentSnapshot`] aggregates facts from several independent,
//! best-effort sources — hardware identity, OS version, app build identity,
//! runtime flags, locale/timezone, display metrics — into one frozen record
//! suitable for attachment to analytics and diagnostic payloads.
//!
//! The platform itself sits behind the [`HostFacts`] trait, so the builder
//! can run against the live host or against fixed values in tests.

pub mod host;
pub mod model;
pub mod snapshot;

pub use host::{DisplayMetrics, HostFacts, ManifestKey};
pub use snapshot::EnvironmentSnapshot;
