//! Nutation, obliquity and ecliptic → equatorial rotation.
//!
//! Low-accuracy nutation (Meeus ch. 22, four terms, ~0.5″) is ample for
//! rise/set work, where refraction uncertainty dominates.

use panchang_math::normalize_360;

/// Nutation in longitude and obliquity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub delta_psi_deg: f64,
    pub delta_eps_deg: f64,
}

/// Nutation at `t` Julian centuries (TT) since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = normalize_360(125.04452 - 1934.136261 * t).to_radians();
    let l_sun = normalize_360(280.4665 + 36000.7698 * t).to_radians();
    let l_moon = normalize_360(218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        delta_psi_deg: dpsi / 3600.0,
        delta_eps_deg: deps / 3600.0,
    }
}

/// Mean obliquity of the ecliptic in degrees (Meeus eq. 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + arcsec / 60.0) / 60.0
}

/// Ecliptic (λ, β) to equatorial (α, δ), all in radians; α in [0, 2π).
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, obliquity_rad: f64) -> (f64, f64) {
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let ra = (sin_l * cos_e - lat_rad.tan() * sin_e).atan2(cos_l);
    let dec = (lat_rad.sin() * cos_e + lat_rad.cos() * sin_e * sin_l).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 Apr 10 0h TD: Δψ = −3.788″, Δε = +9.443″, ε0 = 23°26′27.407″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let n = nutation(t);
        assert!((n.delta_psi_deg * 3600.0 + 3.788).abs() < 0.5, "{n:?}");
        assert!((n.delta_eps_deg * 3600.0 - 9.443).abs() < 0.2, "{n:?}");
        let eps0 = mean_obliquity_deg(t);
        assert!((eps0 - 23.440_946).abs() < 1e-5, "ε0 = {eps0}");
    }

    #[test]
    fn equinox_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44_f64.to_radians());
        assert!(ra.abs() < 1e-12 && dec.abs() < 1e-12);
    }

    #[test]
    fn solstice_declination() {
        let eps = 23.44_f64.to_radians();
        let (ra, dec) = ecliptic_to_equatorial(90_f64.to_radians(), 0.0, eps);
        assert!((ra.to_degrees() - 90.0).abs() < 1e-9);
        assert!((dec - eps).abs() < 1e-12);
    }

    #[test]
    fn pollux_meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911° →
        // α = 116.328942°, δ = 28.026183°
        let (ra, dec) = ecliptic_to_equatorial(
            113.215_630_f64.to_radians(),
            6.684_170_f64.to_radians(),
            23.439_291_1_f64.to_radians(),
        );
        assert!((ra.to_degrees() - 116.328_942).abs() < 1e-5, "α = {}", ra.to_degrees());
        assert!((dec.to_degrees() - 28.026_183).abs() < 1e-5, "δ = {}", dec.to_degrees());
    }
}
