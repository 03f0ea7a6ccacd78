//! Use-Case: Insert Track — eine Lücke der Ziel-Kurve mit der Relativbewegung
//! einer Referenz-Kurve füllen.
//!
//! Die Funktion berechnet nur einen Vorschlag: eine geordnete Sample-Folge
//! für den angefragten Bereich plus die Liste nicht füllbarer Teilbereiche.
//! Das Zurückschreiben in den Store (als undo-fähige Operation) ist Sache
//! der aufrufenden Command-Schicht.

use crate::analysis::anchors::anchor_at;
use crate::core::{PointStatus, Sample, TrackCurve};
use anyhow::{bail, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Inklusiver Frame-Bereich `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    /// Erster Frame (inklusiv)
    pub start: i32,
    /// Letzter Frame (inklusiv)
    pub end: i32,
}

impl FrameRange {
    /// Erstellt einen neuen Bereich
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Anzahl der Frames im Bereich (0 bei leerem Bereich)
    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    /// Prüft ob der Bereich leer ist
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Prüft ob der Frame im Bereich liegt
    pub fn contains(&self, frame: i32) -> bool {
        self.start <= frame && frame <= self.end
    }
}

/// Anker-Situation eines gefüllten Teilbereichs.
///
/// `None` bedeutet: keine Grenz-Anker auf beiden Seiten — die Füllung
/// übernimmt die rohen Referenzwerte ohne Offset-Korrektur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorMode {
    /// Anker an beiden Grenzen, Offsets linear geblendet
    Both,
    /// Nur linker Anker, dessen Offset gilt uniform
    LeftOnly,
    /// Nur rechter Anker, dessen Offset gilt uniform
    RightOnly,
    /// Kein Anker — rohe Referenzwerte
    None,
}

/// Ein tatsächlich gefüllter Teilbereich mit seiner Anker-Situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledRange {
    /// Gefüllter Frame-Bereich
    pub range: FrameRange,
    /// Wie der Teilbereich verankert wurde
    pub anchor_mode: AnchorMode,
}

/// Ergebnis eines Insert-Track-Aufrufs.
///
/// Teilerfolg ist der Normalfall: nicht füllbare Teilbereiche brechen die
/// Operation nie ab, sie werden neben den gefüllten Samples gemeldet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFillOutcome {
    /// Neue Samples für den Bereich, alle mit Status `Tracked`
    pub filled: Vec<Sample>,
    /// Gefüllte Teilbereiche inkl. Anker-Modus
    pub filled_ranges: Vec<FilledRange>,
    /// Teilbereiche ohne ankerfähige Referenz-Samples
    pub unfillable: Vec<FrameRange>,
}

impl GapFillOutcome {
    /// Prüft ob der gesamte angefragte Bereich gefüllt werden konnte.
    pub fn is_complete(&self) -> bool {
        self.unfillable.is_empty()
    }
}

/// Füllt `[range.start, range.end]` der Ziel-Kurve mit der Relativbewegung
/// der Referenz-Kurve.
///
/// - Grenz-Anker sind die ankerfähigen Ziel-Samples bei `range.start - 1`
///   und `range.end + 1`; existieren beide, werden die beiden
///   Offset-Lösungen linear über die Anker-zu-Anker-Spanne geblendet, damit
///   an keiner Grenze ein Sprung entsteht.
/// - Keyframes der Ziel-Kurve innerhalb des Bereichs bleiben unangetastet:
///   sie zerteilen die Füllung in Teilbereiche und verankern diese.
/// - Frames ohne ankerfähiges Referenz-Sample werden als nicht füllbare
///   Bereiche gemeldet statt die Operation abzubrechen.
///
/// Schlägt nur bei `range.start > range.end` fehl.
pub fn insert_track(
    target: &TrackCurve,
    reference: &TrackCurve,
    range: FrameRange,
) -> Result<GapFillOutcome> {
    if range.start > range.end {
        bail!(
            "Ungültiger Insert-Track-Bereich für '{}': Start-Frame {} liegt hinter End-Frame {}",
            target.name(),
            range.start,
            range.end
        );
    }

    let mut outcome = GapFillOutcome {
        filled: Vec::with_capacity(range.len()),
        filled_ranges: Vec::new(),
        unfillable: Vec::new(),
    };

    // Bereich in maximale füllbare Läufe und Lücken zerlegen. Keyframes der
    // Ziel-Kurve beenden beides: sie werden weder gefüllt noch als
    // "nicht füllbar" gemeldet — das sind autoritative Daten, keine Lücke.
    let mut run_start: Option<i32> = None;
    let mut gap_start: Option<i32> = None;

    for frame in range.start..=range.end {
        let preserved = target
            .sample_at(frame)
            .is_some_and(|s| s.status == PointStatus::Keyframe);
        let reference_ok = anchor_at(reference, frame).is_some();

        if preserved {
            if let Some(start) = run_start.take() {
                fill_run(target, reference, start, frame - 1, &mut outcome);
            }
            if let Some(start) = gap_start.take() {
                outcome.unfillable.push(FrameRange::new(start, frame - 1));
            }
        } else if reference_ok {
            if let Some(start) = gap_start.take() {
                outcome.unfillable.push(FrameRange::new(start, frame - 1));
            }
            run_start.get_or_insert(frame);
        } else {
            if let Some(start) = run_start.take() {
                fill_run(target, reference, start, frame - 1, &mut outcome);
            }
            gap_start.get_or_insert(frame);
        }
    }

    if let Some(start) = run_start {
        fill_run(target, reference, start, range.end, &mut outcome);
    }
    if let Some(start) = gap_start {
        outcome.unfillable.push(FrameRange::new(start, range.end));
    }

    for gap in &outcome.unfillable {
        log::warn!(
            "Insert Track '{}': Frames {}–{} nicht füllbar (Referenz '{}' ohne ankerfähige Samples)",
            target.name(),
            gap.start,
            gap.end,
            reference.name()
        );
    }
    log::info!(
        "Insert Track '{}' ← '{}': {} Sample(s) in {} Teilbereich(en) gefüllt, {} Lücke(n)",
        target.name(),
        reference.name(),
        outcome.filled.len(),
        outcome.filled_ranges.len(),
        outcome.unfillable.len()
    );

    Ok(outcome)
}

/// Füllt einen einzelnen Lauf `[start, end]`, in dem die Referenz an jedem
/// Frame ankerfähig ist.
fn fill_run(
    target: &TrackCurve,
    reference: &TrackCurve,
    start: i32,
    end: i32,
    outcome: &mut GapFillOutcome,
) {
    // Offset der Ziel-Kurve gegen die Referenz je Seite. Basis-Frame der
    // Referenz ist die Grenze selbst, falls dort ankerfähig, sonst der
    // nächstgelegene Frame im Lauf.
    let left_offset: Option<Vec2> = anchor_at(target, start - 1).and_then(|boundary| {
        anchor_at(reference, start - 1)
            .or_else(|| anchor_at(reference, start))
            .map(|base| boundary.position - base.position)
    });
    let right_offset: Option<Vec2> = anchor_at(target, end + 1).and_then(|boundary| {
        anchor_at(reference, end + 1)
            .or_else(|| anchor_at(reference, end))
            .map(|base| boundary.position - base.position)
    });

    let anchor_mode = match (left_offset, right_offset) {
        (Some(_), Some(_)) => AnchorMode::Both,
        (Some(_), None) => AnchorMode::LeftOnly,
        (None, Some(_)) => AnchorMode::RightOnly,
        (None, None) => AnchorMode::None,
    };

    // Gewichtung über die volle Anker-zu-Anker-Spanne: die linke Lösung
    // wiegt 1 am linken Anker und 0 am rechten.
    let span = ((end + 1) - (start - 1)) as f32;

    for frame in start..=end {
        let Some(reference_sample) = anchor_at(reference, frame) else {
            // Läufe werden nur über ankerfähige Referenz-Frames gebildet
            continue;
        };
        let reference_pos = reference_sample.position;

        let position = match (left_offset, right_offset) {
            (Some(left), Some(right)) => {
                let left_value = reference_pos + left;
                let right_value = reference_pos + right;
                let t = (frame - (start - 1)) as f32 / span;
                left_value.lerp(right_value, t)
            }
            (Some(left), None) => reference_pos + left,
            (None, Some(right)) => reference_pos + right,
            (None, None) => reference_pos,
        };

        outcome.filled.push(Sample {
            frame,
            position,
            status: PointStatus::Tracked,
        });
    }

    outcome.filled_ranges.push(FilledRange {
        range: FrameRange::new(start, end),
        anchor_mode,
    });
}
