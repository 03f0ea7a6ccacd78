//! Editier-Operationen. Jede Operation berechnet einen Vorschlag und
//! überlässt das Commit (inkl. Undo-Snapshot) der externen Command-Schicht.

pub mod insert_track;

pub use insert_track::{
    insert_track, AnchorMode, FilledRange, FrameRange, GapFillOutcome,
};
