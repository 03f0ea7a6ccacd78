//! Repräsentiert ein einzelnes Tracking-Sample und dessen Status.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Status eines Samples — bestimmt Anker-Fähigkeit und Segment-Klassifikation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointStatus {
    /// Gewöhnliches Sample
    #[default]
    Normal,
    /// Durch Interpolation erzeugt (keine echte Beobachtung)
    Interpolated,
    /// Vom Benutzer gesetzter Keyframe — autoritativ
    Keyframe,
    /// Vom Tracker oder Insert Track erzeugt
    Tracked,
    /// Markiert das Ende eines vertrauenswürdigen Abschnitts
    Endframe,
}

impl PointStatus {
    /// Darf dieses Sample eine Interpolation begrenzen?
    ///
    /// Alle Status außer `Endframe` sind gültige Anker — auch `Interpolated`:
    /// ein interpoliertes Sample blockiert keine weitere Verwendung, es trägt
    /// nur Provenienz-Information für die UI.
    pub fn is_interpolation_anchor(self) -> bool {
        !matches!(self, PointStatus::Endframe)
    }

    /// Beginnt mit diesem Sample ein inaktiver Bereich?
    pub fn starts_inactive_region(self) -> bool {
        matches!(self, PointStatus::Endframe)
    }

    /// Priorität für Timeline-Marker: der "auffälligste" Status gewinnt.
    ///
    /// Reihenfolge: Endframe > Keyframe > Tracked > Interpolated > Normal.
    pub fn timeline_priority(self) -> u8 {
        match self {
            PointStatus::Endframe => 4,
            PointStatus::Keyframe => 3,
            PointStatus::Tracked => 2,
            PointStatus::Interpolated => 1,
            PointStatus::Normal => 0,
        }
    }
}

/// Ein einzelnes Sample einer Tracking-Kurve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Frame-Nummer (eindeutig innerhalb einer Kurve)
    pub frame: i32,
    /// Position im Bildraum (Pixel)
    pub position: Vec2,
    /// Klassifikation des Samples
    pub status: PointStatus,
}

impl Sample {
    /// Erstellt ein neues Sample
    pub fn new(frame: i32, x: f32, y: f32, status: PointStatus) -> Self {
        Self {
            frame,
            position: Vec2::new(x, y),
            status,
        }
    }
}
