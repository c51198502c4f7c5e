use futures::Stream;
use venuefeed_core::Position;

/// A stream of user positions, delivered at whatever cadence the platform
/// location service chooses.
pub trait LocationSource: Stream<Item = Position> + Send + Unpin {}

impl<T> LocationSource for T where T: Stream<Item = Position> + Send + Unpin {}
