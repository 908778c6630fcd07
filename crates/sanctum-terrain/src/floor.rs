//! Floor elevation: a pure function of ground position.
//!
//! The map is split into stacked levels joined by stairs and the altar
//! ramp. Regions are tested from the most specific raised structure down
//! to the general level fallbacks; the first match wins. Spans are
//! half-open: lower bound inclusive, upper bound exclusive.

use glam::Vec2;

/// Women's court (lowest level).
pub const LEVEL_WOMEN: f32 = 0.0;
/// Azara (inner court).
pub const LEVEL_AZARA: f32 = 2.5;
/// Sanctuary platform.
pub const LEVEL_SANCTUARY: f32 = 5.0;
/// Top of the altar.
pub const ALTAR_TOP: f32 = 8.5;
/// Returned outside the defined map.
pub const OUTSIDE_ELEVATION: f32 = -5.0;

/// Center of the semicircular Nicanor stairs.
pub const NICANOR_CENTER: Vec2 = Vec2::new(0.0, 48.0);
/// Footprint radius of the Nicanor stairs.
pub const NICANOR_RADIUS: f32 = 15.0;
/// Horizontal run over which the Nicanor stairs descend to the women's court.
pub const NICANOR_RUN: f32 = 12.0;

/// Named floor region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    AltarTop,
    AltarRamp,
    Sanctuary,
    SanctuaryStairs,
    Azara,
    NicanorStairs,
    WomensCourt,
    Outside,
}

fn in_span(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v < hi
}

/// Classify a ground position.
pub fn region_at(x: f32, z: f32) -> Region {
    if in_span(x, -9.0, 9.0) && in_span(z, 11.0, 29.0) {
        return Region::AltarTop;
    }
    if in_span(x, -3.0, 3.0) && in_span(z, 28.0, 46.0) {
        return Region::AltarRamp;
    }
    if z < -5.0 {
        return Region::Sanctuary;
    }
    if in_span(z, -5.0, 2.0) && x.abs() < 10.0 {
        return Region::SanctuaryStairs;
    }
    if z < 48.0 {
        return Region::Azara;
    }
    if in_span(z, 48.0, 60.0) && Vec2::new(x, z).distance(NICANOR_CENTER) < NICANOR_RADIUS {
        return Region::NicanorStairs;
    }
    if in_span(z, 48.0, 130.0) {
        return Region::WomensCourt;
    }
    Region::Outside
}

/// Floor elevation at a ground position.
pub fn floor_height(x: f32, z: f32) -> f32 {
    match region_at(x, z) {
        Region::AltarTop => ALTAR_TOP,
        Region::AltarRamp => {
            // 8.5 at the altar edge (z=28) down to azara level at the foot.
            let pct = (z - 28.0) / 18.0;
            (ALTAR_TOP - 6.0 * pct).max(LEVEL_AZARA)
        }
        Region::Sanctuary => LEVEL_SANCTUARY,
        Region::SanctuaryStairs => {
            let p = (2.0 - z) / 7.0;
            LEVEL_AZARA + p * (LEVEL_SANCTUARY - LEVEL_AZARA)
        }
        Region::Azara => LEVEL_AZARA,
        Region::NicanorStairs => {
            let d = Vec2::new(x, z).distance(NICANOR_CENTER);
            let p = 1.0 - d / NICANOR_RUN;
            (LEVEL_WOMEN + p * (LEVEL_AZARA - LEVEL_WOMEN)).clamp(LEVEL_WOMEN, LEVEL_AZARA)
        }
        Region::WomensCourt => LEVEL_WOMEN,
        Region::Outside => OUTSIDE_ELEVATION,
    }
}

/// Floor elevation at a ground-plane vector (`y` carries world Z).
pub fn floor_at(p: Vec2) -> f32 {
    floor_height(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_fallbacks() {
        assert_eq!(floor_height(0.0, 100.0), LEVEL_WOMEN);
        assert_eq!(floor_height(25.0, 30.0), LEVEL_AZARA);
        assert_eq!(floor_height(0.0, -20.0), LEVEL_SANCTUARY);
        assert_eq!(floor_height(0.0, 140.0), OUTSIDE_ELEVATION);
    }

    #[test]
    fn test_altar_top_wins_over_ramp() {
        // z in [28, 29) lies in both footprints.
        assert_eq!(region_at(0.0, 28.5), Region::AltarTop);
        assert_eq!(floor_height(0.0, 28.5), ALTAR_TOP);
    }

    #[test]
    fn test_ramp_descends_to_azara() {
        let top = floor_height(0.0, 29.0);
        let mid = floor_height(0.0, 37.0);
        let foot = floor_height(0.0, 45.9);
        assert!(top > mid && mid > foot);
        assert!(foot >= LEVEL_AZARA);
        assert!((floor_height(0.0, 37.0) - (ALTAR_TOP - 3.0)).abs() < 1e-5);
    }

    #[test]
    fn test_sanctuary_stairs_interpolate() {
        assert!((floor_height(0.0, -5.0) - LEVEL_SANCTUARY).abs() < 1e-5);
        assert!((floor_height(0.0, -1.5) - 3.75).abs() < 1e-5);
        // Just past the top of the stairs is azara level.
        assert_eq!(floor_height(0.0, 2.0), LEVEL_AZARA);
        // Outside the stair width the azara floor continues.
        assert_eq!(floor_height(12.0, 0.0), LEVEL_AZARA);
    }

    #[test]
    fn test_nicanor_stairs_by_distance() {
        assert_eq!(region_at(0.0, 50.0), Region::NicanorStairs);
        let near = floor_height(0.0, 49.0);
        let far = floor_height(0.0, 58.0);
        assert!(near > far);
        assert!((far - LEVEL_AZARA * (1.0 - 10.0 / NICANOR_RUN)).abs() < 1e-5);
        // Beyond the run the steps are flush with the women's court.
        assert_eq!(floor_height(10.0, 58.0), LEVEL_WOMEN);
        // Outside the footprint is plain court.
        assert_eq!(region_at(14.0, 58.0), Region::WomensCourt);
    }

    #[test]
    fn test_nicanor_top_step_meets_azara_on_axis() {
        assert_eq!(floor_height(0.0, 48.0), LEVEL_AZARA);
        assert_eq!(floor_height(0.0, 47.99), LEVEL_AZARA);
        // Off axis the radial profile starts lower than the azara.
        let step = floor_height(7.9, 47.99) - floor_height(7.9, 48.0);
        assert!((step - LEVEL_AZARA * 7.9 / NICANOR_RUN).abs() < 1e-4);
    }

    #[test]
    fn test_deterministic_and_total_over_play_area() {
        let mut z = -200.0;
        while z < 130.0 {
            let mut x = -200.0;
            while x <= 200.0 {
                let a = floor_height(x, z);
                let b = floor_height(x, z);
                assert_eq!(a.to_bits(), b.to_bits());
                assert!(a.is_finite());
                assert_ne!(a, OUTSIDE_ELEVATION, "sentinel at ({x}, {z})");
                x += 0.75;
            }
            z += 0.75;
        }
    }
}
