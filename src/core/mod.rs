//! Core-Domänentypen: Samples, Kurven, Segmente.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - Sample/PointStatus: eine einzelne Tracking-Beobachtung mit Klassifikation
//! - TrackCurve: validierte, nach Frames geordnete Sample-Folge
//! - SegmentedCurve: abgeleitete Partition in aktive/inaktive Segmente

pub mod curve;
pub mod sample;
pub mod segment;

pub use curve::{CurveSet, TrackCurve};
pub use sample::{PointStatus, Sample};
pub use segment::{segment_curve, Segment, SegmentedCurve};
