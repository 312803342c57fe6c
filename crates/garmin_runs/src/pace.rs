//! Per-kilometer pace derivation from lap splits.

use garmin_connect_client::Lap;

/// Lower/upper bounds (meters, exclusive) for a lap to count as "one
/// kilometer". Autolap distances drift a little around the mark.
const KM_LAP_MIN_M: f64 = 950.0;
const KM_LAP_MAX_M: f64 = 1050.0;

/// Pace in minutes for each roughly-1 km lap, in lap order.
///
/// Laps outside the tolerance band (warmup fragments, manual partial laps)
/// are silently excluded.
pub fn pace_per_km(laps: &[Lap]) -> Vec<f64> {
    laps.iter()
        .filter(|lap| lap.distance > KM_LAP_MIN_M && lap.distance < KM_LAP_MAX_M)
        .map(|lap| lap.duration / 60.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(distance: f64, duration: f64) -> Lap {
        Lap { distance, duration }
    }

    #[test]
    fn pace_is_duration_over_sixty_in_lap_order() {
        let laps = [lap(1000.0, 300.0), lap(1000.0, 330.0), lap(50.0, 10.0)];
        assert_eq!(pace_per_km(&laps), vec![5.0, 5.5]);
    }

    #[test]
    fn band_bounds_are_exclusive() {
        let laps = [lap(950.0, 300.0), lap(1050.0, 300.0), lap(950.1, 285.0)];
        assert_eq!(pace_per_km(&laps), vec![4.75]);
    }

    #[test]
    fn empty_laps_give_empty_series() {
        assert!(pace_per_km(&[]).is_empty());
    }

    #[test]
    fn output_never_longer_than_input() {
        let laps = [lap(1000.0, 290.0), lap(2000.0, 600.0), lap(1010.5, 295.0)];
        let pace = pace_per_km(&laps);
        assert!(pace.len() <= laps.len());
        assert_eq!(pace, vec![290.0 / 60.0, 295.0 / 60.0]);
    }
}
