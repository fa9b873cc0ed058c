//! Correlation of check-started and check-finished events.
//!
//! The gate passes no request or check identifier to its hooks, so the two
//! events are paired by content: both ends format the check arguments, encode
//! them as JSON, and hash the bytes into a [`CorrelationKey`]. Open spans wait
//! in a [`PendingSet`] under that key until the matching finish arrives.
//!
//! Actor and ability are not part of the key. Two concurrent checks with the
//! same formatted arguments collide, and the later start replaces the earlier
//! pending span.

mod key;
mod pending;

pub use key::CorrelationKey;
pub use pending::PendingSet;
