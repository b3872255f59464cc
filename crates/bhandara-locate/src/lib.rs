//! One-shot acquisition of the visitor's position.
//!
//! A [`PositionSource`] answers a single "where am I?" request. The
//! [`request_position_once`] helper fires that request in the background and
//! delivers the answer over a oneshot channel; a failed lookup is logged and the
//! channel simply closes, leaving callers on their no-position default.

pub mod client;
pub mod error;
pub mod once;

use std::future::Future;

use bhandara_core::Coordinates;

pub use client::IpGeolocator;
pub use error::LocateError;
pub use once::request_position_once;

/// Anything that can resolve the current position once.
pub trait PositionSource: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    fn locate(&self) -> impl Future<Output = Result<Coordinates, LocateError>> + Send;
}

/// A position supplied up front, e.g. from command-line flags.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl PositionSource for FixedPosition {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn locate(&self) -> Result<Coordinates, LocateError> {
        Ok(self.0)
    }
}

/// A platform without any location service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl PositionSource for Unsupported {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    async fn locate(&self) -> Result<Coordinates, LocateError> {
        Err(LocateError::Unsupported)
    }
}
