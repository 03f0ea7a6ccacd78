//! Aggregation von Sample-Status über mehrere Kurven für Timeline-Marker.
//!
//! Die Timeline zeigt pro Frame genau einen Marker. Damit der Marker die
//! "auffälligste" Bedingung zeigt statt einer willkürlichen, gewinnt der
//! Status mit der höchsten Priorität:
//! Endframe > Keyframe > Tracked > Interpolated > Normal > keine Daten.

use crate::core::{CurveSet, PointStatus, TrackCurve};

/// Repräsentativer Status eines Frames über alle Kurven des Snapshots.
///
/// `None`, wenn keine Kurve an diesem Frame ein Sample hat. Kurven ohne
/// Sample an dem Frame werden schlicht ausgelassen — kein Fehlerfall.
pub fn aggregate_frame_status(frame: i32, curves: &CurveSet) -> Option<PointStatus> {
    curves
        .iter()
        .filter_map(|curve| curve.sample_at(frame))
        .map(|sample| sample.status)
        .max_by_key(|status| status.timeline_priority())
}

/// Marker-Zeile einer einzelnen Kurve über ein Frame-Fenster (inklusiv).
///
/// Ein Eintrag pro Frame von `first_frame` bis `last_frame`; `None` für
/// Frames ohne Sample. Das ist die Darstellungsgrundlage der per-Kurve
/// Timeline-Streifen.
pub fn frame_status_row(
    curve: &TrackCurve,
    first_frame: i32,
    last_frame: i32,
) -> Vec<Option<PointStatus>> {
    if last_frame < first_frame {
        return Vec::new();
    }
    (first_frame..=last_frame)
        .map(|frame| curve.sample_at(frame).map(|sample| sample.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sample;

    fn curve(name: &str, samples: Vec<Sample>) -> TrackCurve {
        TrackCurve::from_samples(name, samples).unwrap()
    }

    fn s(frame: i32, status: PointStatus) -> Sample {
        Sample::new(frame, 0.0, 0.0, status)
    }

    #[test]
    fn test_hoechste_prioritaet_gewinnt() {
        let mut set = CurveSet::new();
        set.insert(curve("a", vec![s(10, PointStatus::Normal)]));
        set.insert(curve("b", vec![s(10, PointStatus::Keyframe)]));
        set.insert(curve("c", vec![s(10, PointStatus::Tracked)]));

        assert_eq!(aggregate_frame_status(10, &set), Some(PointStatus::Keyframe));
    }

    #[test]
    fn test_endframe_uebersteuert_alle() {
        let mut set = CurveSet::new();
        set.insert(curve("a", vec![s(10, PointStatus::Keyframe)]));
        set.insert(curve("b", vec![s(10, PointStatus::Endframe)]));

        assert_eq!(aggregate_frame_status(10, &set), Some(PointStatus::Endframe));
    }

    #[test]
    fn test_frame_ohne_daten_ergibt_none() {
        let mut set = CurveSet::new();
        set.insert(curve("a", vec![s(10, PointStatus::Tracked)]));

        assert_eq!(aggregate_frame_status(11, &set), None);
        assert_eq!(aggregate_frame_status(11, &CurveSet::new()), None);
    }

    #[test]
    fn test_kurven_ohne_sample_werden_ausgelassen() {
        let mut set = CurveSet::new();
        set.insert(curve("a", vec![s(5, PointStatus::Endframe)]));
        set.insert(curve("b", vec![s(10, PointStatus::Interpolated)]));

        // "a" hat an Frame 10 kein Sample und zählt nicht mit
        assert_eq!(
            aggregate_frame_status(10, &set),
            Some(PointStatus::Interpolated)
        );
    }

    #[test]
    fn test_frame_status_row_fenster() {
        let c = curve(
            "a",
            vec![s(2, PointStatus::Keyframe), s(4, PointStatus::Tracked)],
        );

        assert_eq!(
            frame_status_row(&c, 1, 4),
            vec![
                None,
                Some(PointStatus::Keyframe),
                None,
                Some(PointStatus::Tracked),
            ]
        );
        assert!(frame_status_row(&c, 5, 4).is_empty());
    }
}
