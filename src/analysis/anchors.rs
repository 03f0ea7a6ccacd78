//! Auflösung gültiger Interpolations-Anker.
//!
//! Externe Interpolations-/Snapping-Logik darf nur Samples als Grenze
//! verwenden, deren Status ankerfähig ist. Die Interpolation selbst findet
//! außerhalb der Engine statt — hier wird ausschließlich gefiltert.

use crate::core::{Sample, TrackCurve};

/// Indizes aller ankerfähigen Samples der Kurve, in Frame-Reihenfolge.
///
/// Garantie: `Endframe`-Samples erscheinen nie im Ergebnis — auch dann
/// nicht, wenn sie für den Aufrufer in einem "aktiven" Bereich liegen.
pub fn valid_anchors(curve: &TrackCurve) -> Vec<usize> {
    curve
        .samples()
        .iter()
        .enumerate()
        .filter(|(_, sample)| sample.status.is_interpolation_anchor())
        .map(|(index, _)| index)
        .collect()
}

/// Ankerfähiges Sample an exakt diesem Frame, sonst `None`.
///
/// Ein vorhandenes, aber nicht ankerfähiges Sample (`Endframe`) zählt wie
/// "kein Sample".
pub fn anchor_at(curve: &TrackCurve, frame: i32) -> Option<&Sample> {
    curve
        .sample_at(frame)
        .filter(|sample| sample.status.is_interpolation_anchor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointStatus;

    fn s(frame: i32, status: PointStatus) -> Sample {
        Sample::new(frame, 0.0, 0.0, status)
    }

    #[test]
    fn test_endframes_sind_nie_anker() {
        let curve = TrackCurve::from_samples(
            "pt_01",
            vec![
                s(1, PointStatus::Keyframe),
                s(2, PointStatus::Endframe),
                s(3, PointStatus::Tracked),
                s(4, PointStatus::Endframe),
                s(5, PointStatus::Interpolated),
            ],
        )
        .unwrap();

        assert_eq!(valid_anchors(&curve), vec![0, 2, 4]);
    }

    #[test]
    fn test_leere_kurve_hat_keine_anker() {
        let curve = TrackCurve::from_samples("pt_01", Vec::new()).unwrap();
        assert!(valid_anchors(&curve).is_empty());
    }

    #[test]
    fn test_anchor_at_filtert_endframe() {
        let curve = TrackCurve::from_samples(
            "pt_01",
            vec![s(1, PointStatus::Normal), s(2, PointStatus::Endframe)],
        )
        .unwrap();

        assert!(anchor_at(&curve, 1).is_some());
        assert!(anchor_at(&curve, 2).is_none(), "Endframe darf nicht ankern");
        assert!(anchor_at(&curve, 3).is_none(), "fehlendes Sample ankert nicht");
    }
}
