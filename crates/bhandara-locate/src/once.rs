use bhandara_core::Coordinates;
use tokio::sync::oneshot;

use crate::PositionSource;

/// Fire a single position request in the background.
///
/// The receiver yields the coordinates on success. On any failure the error is
/// logged and the sender is dropped, so the receiver resolves to `Err` and the
/// caller keeps its no-position default. Nothing is retried.
///
/// Must be called from within a tokio runtime.
pub fn request_position_once<S>(source: S) -> oneshot::Receiver<Coordinates>
where
    S: PositionSource + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        match source.locate().await {
            Ok(position) => {
                tracing::info!(
                    source = source.name(),
                    lat = position.lat,
                    lng = position.lng,
                    "position acquired"
                );
                // The receiver may already be gone; nothing to do then.
                let _ = tx.send(position);
            }
            Err(e) => {
                tracing::info!(
                    source = source.name(),
                    error = %e,
                    "location access denied or unavailable"
                );
            }
        }
    });

    rx
}
