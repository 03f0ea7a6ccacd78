//! Track Curve Engine.
//! Segmentierung, Anker-Auflösung und Gap-Filling (Insert Track) für
//! 2D-Tracking-Kurven — als Library exportiert für Host-Anwendung und Tests.

pub mod analysis;
pub mod core;
pub mod edit;

pub use analysis::{aggregate_frame_status, anchor_at, frame_status_row, valid_anchors};
pub use core::{segment_curve, CurveSet, PointStatus, Sample, Segment, SegmentedCurve, TrackCurve};
pub use edit::{insert_track, AnchorMode, FilledRange, FrameRange, GapFillOutcome};
