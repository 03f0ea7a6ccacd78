//! Abgeleitete Read-only-Sichten auf Kurvendaten: Anker-Auflösung und
//! Frame-Status-Aggregation für die Timeline.

pub mod anchors;
pub mod frame_status;

pub use anchors::{anchor_at, valid_anchors};
pub use frame_status::{aggregate_frame_status, frame_status_row};
