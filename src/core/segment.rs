//! Segmentierung einer Kurve in aktive und inaktive Bereiche.
//!
//! Ein `Endframe`-Sample beendet den vertrauenswürdigen Abschnitt einer
//! Kurve: das aktive Segment schließt mit dem Sample davor, und ab dem
//! `Endframe` ist der gesamte Rest der Kurve ein einziges inaktives
//! Segment. Spätere Keyframe-/Tracked-Samples öffnen **kein** neues aktives
//! Segment — Renderer (gestrichelte Darstellung) und Selektion sind auf
//! genau dieses Verhalten gebaut.
//!
//! Die Segmentierung ist eine reine Funktion der Eingabe-Kurve und wird bei
//! jeder Datenänderung komplett neu berechnet; es gibt keinen inkrementellen
//! Zustand zwischen Aufrufen.

use super::TrackCurve;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Ein maximaler zusammenhängender Bereich gleicher Klassifikation.
///
/// Segmente besitzen keine Sample-Kopien: `sample_range` indiziert in das
/// Sample-Array der zugehörigen Kurve (halb-offen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Erster Frame des Segments (inklusiv)
    pub start_frame: i32,
    /// Letzter Frame des Segments (inklusiv)
    pub end_frame: i32,
    /// Index-Bereich in `TrackCurve::samples()` (halb-offen)
    pub sample_range: Range<usize>,
    /// Aktiv = vertrauenswürdig getrackt; inaktiv = Lücke/deaktiviert
    pub is_active: bool,
}

/// Das Segmentierungs-Ergebnis einer Kurve.
///
/// Invarianten (siehe Tests): Segmente sind nach `start_frame` geordnet,
/// lückenlos und überlappungsfrei — jedes Sample gehört zu genau einem
/// Segment. Leere Kurve ⇒ leere Segmentliste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedCurve {
    /// Name der zugehörigen Kurve
    pub curve_name: String,
    /// Geordnete, lückenlose Segmentfolge
    pub segments: Vec<Segment>,
}

impl SegmentedCurve {
    /// Findet das Segment, das diesen Frame enthält.
    ///
    /// `None` für Frames außerhalb der Kurve — auch für Frames *zwischen*
    /// zwei Samples: Segmente decken Sample-Indizes ab, keine Frame-Lücken.
    pub fn segment_at_frame(&self, frame: i32) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|seg| seg.start_frame <= frame && frame <= seg.end_frame)
    }

    /// Prüft ob der Frame in einem aktiven Segment liegt.
    pub fn is_active_at(&self, frame: i32) -> bool {
        self.segment_at_frame(frame).is_some_and(|seg| seg.is_active)
    }
}

/// Partitioniert eine Kurve in aktive und inaktive Segmente.
///
/// Ein einzelner Scan in Frame-Reihenfolge: beim ersten Sample mit
/// `starts_inactive_region` wird das laufende aktive Segment davor
/// geschlossen und ein inaktives eröffnet, das bis zum Kurvenende reicht.
pub fn segment_curve(curve: &TrackCurve) -> SegmentedCurve {
    let samples = curve.samples();
    let mut segments = Vec::new();

    if samples.is_empty() {
        return SegmentedCurve {
            curve_name: curve.name().to_string(),
            segments,
        };
    }

    let mut active = true;
    let mut segment_start = 0usize;

    for (index, sample) in samples.iter().enumerate() {
        if active && sample.status.starts_inactive_region() {
            if index > segment_start {
                segments.push(Segment {
                    start_frame: samples[segment_start].frame,
                    end_frame: samples[index - 1].frame,
                    sample_range: segment_start..index,
                    is_active: true,
                });
            }
            segment_start = index;
            active = false;
            // Einmal inaktiv, immer inaktiv: kein späterer Status öffnet den
            // Bereich wieder (Insert-Track-Konvention, siehe DESIGN.md).
        }
    }

    segments.push(Segment {
        start_frame: samples[segment_start].frame,
        end_frame: samples[samples.len() - 1].frame,
        sample_range: segment_start..samples.len(),
        is_active: active,
    });

    SegmentedCurve {
        curve_name: curve.name().to_string(),
        segments,
    }
}
