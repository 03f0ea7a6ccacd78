//! Die TrackCurve-Datenstruktur: validierte, nach Frames geordnete Samples.

use super::Sample;
use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Eine Tracking-Kurve: die Trajektorie eines Tracking-Punkts über Frames.
///
/// Die Samples sind strikt aufsteigend nach Frame geordnet und eindeutig —
/// das wird beim Erstellen geprüft und danach nie wieder verletzt, da die
/// Kurve nach außen unveränderlich ist. Alle abgeleiteten Strukturen
/// (Segmente, Anker-Listen) referenzieren per Index in dieses Sample-Array.
///
/// Bewusst nur `Serialize`: Einlesen läuft immer über `from_samples`, damit
/// die Ordnungs-Invariante nicht per Deserialisierung umgangen werden kann.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackCurve {
    name: String,
    samples: Vec<Sample>,
}

impl TrackCurve {
    /// Erstellt eine Kurve aus geordneten Samples.
    ///
    /// Schlägt fehl, wenn die Frames nicht strikt aufsteigend sind
    /// (Duplikate oder falsche Reihenfolge). Die Engine repariert Eingaben
    /// bewusst nicht — ein Sortierfehler deutet auf korrupte Daten im
    /// aufrufenden Store hin und darf nicht maskiert werden.
    pub fn from_samples(name: impl Into<String>, samples: Vec<Sample>) -> Result<Self> {
        let name = name.into();
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].frame <= pair[0].frame {
                log::warn!(
                    "Kurve '{}' zurückgewiesen: Frame {} an Index {} nicht aufsteigend",
                    name,
                    pair[1].frame,
                    index + 1
                );
                bail!(
                    "Ungültige Kurve '{}': Frame {} an Index {} ist nicht größer als Vorgänger-Frame {}",
                    name,
                    pair[1].frame,
                    index + 1,
                    pair[0].frame
                );
            }
        }
        Ok(Self { name, samples })
    }

    /// Name der Kurve (Identität im externen Store)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alle Samples in Frame-Reihenfolge
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Anzahl der Samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Prüft ob die Kurve leer ist
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Erster Frame der Kurve
    pub fn first_frame(&self) -> Option<i32> {
        self.samples.first().map(|s| s.frame)
    }

    /// Letzter Frame der Kurve
    pub fn last_frame(&self) -> Option<i32> {
        self.samples.last().map(|s| s.frame)
    }

    /// Index des Samples mit exakt diesem Frame — O(log n)
    pub fn index_of_frame(&self, frame: i32) -> Option<usize> {
        self.samples.binary_search_by_key(&frame, |s| s.frame).ok()
    }

    /// Sample an exakt diesem Frame — O(log n)
    pub fn sample_at(&self, frame: i32) -> Option<&Sample> {
        self.index_of_frame(frame).map(|i| &self.samples[i])
    }
}

/// Ein konsistenter Read-only-Snapshot mehrerer Kurven.
///
/// Spiegelt den `get_curve(name)`-Vertrag des externen Stores wider, ohne
/// dass die Engine den reaktiven Store selbst kennt. Die Reihenfolge der
/// Einfügung bleibt erhalten, damit Aggregation und Iteration deterministisch
/// sind.
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    curves: IndexMap<String, TrackCurve>,
}

impl CurveSet {
    /// Erstellt einen leeren Snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Kurve ein; eine vorhandene Kurve gleichen Namens wird ersetzt.
    pub fn insert(&mut self, curve: TrackCurve) {
        self.curves.insert(curve.name().to_string(), curve);
    }

    /// Liefert die Kurve mit diesem Namen.
    pub fn get_curve(&self, name: &str) -> Option<&TrackCurve> {
        self.curves.get(name)
    }

    /// Iterator über alle Kurven in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &TrackCurve> {
        self.curves.values()
    }

    /// Anzahl der Kurven im Snapshot
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Prüft ob der Snapshot leer ist
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointStatus;

    fn sample(frame: i32) -> Sample {
        Sample::new(frame, frame as f32, 0.0, PointStatus::Tracked)
    }

    #[test]
    fn test_leere_kurve_ist_gueltig() {
        let curve = TrackCurve::from_samples("pt_01", Vec::new()).unwrap();
        assert!(curve.is_empty());
        assert_eq!(curve.first_frame(), None);
        assert_eq!(curve.last_frame(), None);
    }

    #[test]
    fn test_duplikat_frame_wird_zurueckgewiesen() {
        let result = TrackCurve::from_samples("pt_01", vec![sample(1), sample(2), sample(2)]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Index 2"), "Fehlermeldung muss den Index nennen: {err}");
        assert!(err.contains("Frame 2"), "Fehlermeldung muss den Frame nennen: {err}");
    }

    #[test]
    fn test_absteigender_frame_wird_zurueckgewiesen() {
        let result = TrackCurve::from_samples("pt_01", vec![sample(5), sample(3)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_frame_lookup_per_binaersuche() {
        let curve =
            TrackCurve::from_samples("pt_01", vec![sample(2), sample(5), sample(9)]).unwrap();
        assert_eq!(curve.index_of_frame(5), Some(1));
        assert_eq!(curve.index_of_frame(6), None);
        assert_eq!(curve.sample_at(9).map(|s| s.frame), Some(9));
        assert_eq!(curve.first_frame(), Some(2));
        assert_eq!(curve.last_frame(), Some(9));
    }

    #[test]
    fn test_curveset_ersetzt_bei_gleichem_namen() {
        let mut set = CurveSet::new();
        set.insert(TrackCurve::from_samples("a", vec![sample(1)]).unwrap());
        set.insert(TrackCurve::from_samples("b", vec![sample(1)]).unwrap());
        set.insert(TrackCurve::from_samples("a", vec![sample(1), sample(2)]).unwrap());

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_curve("a").unwrap().len(), 2);
        // Einfüge-Reihenfolge bleibt erhalten
        let names: Vec<&str> = set.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
