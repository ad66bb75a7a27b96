//! Geocentric position of the Moon.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47: the principal
//! periodic terms of ELP-2000/82 (Tables 47.A and 47.B, largest terms only)
//! plus the Venus, Jupiter and flattening additive terms. Accuracy is
//! roughly 10″ in longitude and 4″ in latitude.

use panchang_math::normalize_360;

/// Ecliptic position of the Moon referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Geocentric longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Geocentric latitude in degrees.
    pub latitude_deg: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

impl LunarPosition {
    /// Equatorial horizontal parallax in degrees.
    pub fn parallax_deg(&self) -> f64 {
        (6378.14 / self.distance_km).asin().to_degrees()
    }
}

#[rustfmt::skip]
static LON_DIST_TERMS: [[i32; 6]; 60] = [
    // D   M   M'  F    Σl (1e-6°)   Σr (1e-3 km)
    [ 0,  0,  1,  0,   6288774,  -20905355],
    [ 2,  0, -1,  0,   1274027,   -3699111],
    [ 2,  0,  0,  0,    658314,   -2955968],
    [ 0,  0,  2,  0,    213618,    -569925],
    [ 0,  1,  0,  0,   -185116,      48888],
    [ 0,  0,  0,  2,   -114332,      -3149],
    [ 2,  0, -2,  0,     58793,     246158],
    [ 2, -1, -1,  0,     57066,    -152138],
    [ 2,  0,  1,  0,     53322,    -170733],
    [ 2, -1,  0,  0,     45758,    -204586],
    [ 0,  1, -1,  0,    -40923,    -129620],
    [ 1,  0,  0,  0,    -34720,     108743],
    [ 0,  1,  1,  0,    -30383,     104755],
    [ 2,  0,  0, -2,     15327,      10321],
    [ 0,  0,  1,  2,    -12528,          0],
    [ 0,  0,  1, -2,     10980,      79661],
    [ 4,  0, -1,  0,     10675,     -34782],
    [ 0,  0,  3,  0,     10034,     -23210],
    [ 4,  0, -2,  0,      8548,     -21636],
    [ 2,  1, -1,  0,     -7888,      24208],
    [ 2,  1,  0,  0,     -6766,      30824],
    [ 1,  0, -1,  0,     -5163,      -8379],
    [ 1,  1,  0,  0,      4987,     -16675],
    [ 2, -1,  1,  0,      4036,     -12831],
    [ 2,  0,  2,  0,      3994,     -10445],
    [ 4,  0,  0,  0,      3861,     -11650],
    [ 2,  0, -3,  0,      3665,      14403],
    [ 0,  1, -2,  0,     -2689,      -7003],
    [ 2,  0, -1,  2,     -2602,          0],
    [ 2, -1, -2,  0,      2390,      10056],
    [ 1,  0,  1,  0,     -2348,       6322],
    [ 2, -2,  0,  0,      2236,      -9884],
    [ 0,  1,  2,  0,     -2120,       5751],
    [ 0,  2,  0,  0,     -2069,          0],
    [ 2, -2, -1,  0,      2048,      -4950],
    [ 2,  0,  1, -2,     -1773,       4130],
    [ 2,  0,  0,  2,     -1595,          0],
    [ 4, -1, -1,  0,      1215,      -3958],
    [ 0,  0,  2,  2,     -1110,          0],
    [ 3,  0, -1,  0,      -892,       3258],
    [ 2,  1,  1,  0,      -810,       2616],
    [ 4, -1, -2,  0,       759,      -1897],
    [ 0,  2, -1,  0,      -713,      -2117],
    [ 2,  2, -1,  0,      -700,       2354],
    [ 2,  1, -2,  0,       691,          0],
    [ 2, -1,  0, -2,       596,          0],
    [ 4,  0,  1,  0,       549,      -1423],
    [ 0,  0,  4,  0,       537,      -1117],
    [ 4, -1,  0,  0,       520,      -1571],
    [ 1,  0, -2,  0,      -487,      -1739],
    [ 2,  1,  0, -2,      -399,          0],
    [ 0,  0,  2, -2,      -381,      -4421],
    [ 1,  1,  1,  0,       351,          0],
    [ 3,  0, -2,  0,      -340,          0],
    [ 4,  0, -3,  0,       330,          0],
    [ 2, -1,  2,  0,       327,          0],
    [ 0,  2,  1,  0,      -323,       1165],
    [ 1,  1, -1,  0,       299,          0],
    [ 2,  0,  3,  0,       294,          0],
    [ 2,  0, -1, -2,         0,       8752],
];

#[rustfmt::skip]
static LAT_TERMS: [[i32; 5]; 30] = [
    // D   M   M'  F    Σb (1e-6°)
    [ 0,  0,  0,  1,   5128122],
    [ 0,  0,  1,  1,    280602],
    [ 0,  0,  1, -1,    277693],
    [ 2,  0,  0, -1,    173237],
    [ 2,  0, -1,  1,     55413],
    [ 2,  0, -1, -1,     46271],
    [ 2,  0,  0,  1,     32573],
    [ 0,  0,  2,  1,     17198],
    [ 2,  0,  1, -1,      9266],
    [ 0,  0,  2, -1,      8822],
    [ 2, -1,  0, -1,      8216],
    [ 2,  0, -2, -1,      4324],
    [ 2,  0,  1,  1,      4200],
    [ 2,  1,  0, -1,     -3359],
    [ 2, -1, -1,  1,      2463],
    [ 2, -1,  0,  1,      2211],
    [ 2, -1, -1, -1,      2065],
    [ 0,  1, -1, -1,     -1870],
    [ 4,  0, -1, -1,      1828],
    [ 0,  1,  0,  1,     -1794],
    [ 0,  0,  0,  3,     -1749],
    [ 0,  1, -1,  1,     -1565],
    [ 1,  0,  0,  1,     -1491],
    [ 0,  1,  1,  1,     -1475],
    [ 0,  1,  1, -1,     -1410],
    [ 0,  1,  0, -1,     -1344],
    [ 1,  0,  0, -1,     -1335],
    [ 0,  0,  3,  1,      1107],
    [ 4,  0,  0, -1,      1021],
    [ 4,  0, -1,  1,       833],
];

/// Moon position at `t` Julian centuries (TT) since J2000.0.
pub fn lunar_position(t: f64) -> LunarPosition {
    let mean_lon = 218.3164477
        + t * (481_267.881_234_21 + t * (-0.0015786 + t * (1.0 / 538_841.0 - t / 65_194_000.0)));
    let elong = 297.8501921
        + t * (445_267.111_403_4 + t * (-0.0018819 + t * (1.0 / 545_868.0 - t / 113_065_000.0)));
    let sun_anom = 357.5291092 + t * (35_999.050_290_9 + t * (-0.0001536 + t / 24_490_000.0));
    let moon_anom = 134.9633964
        + t * (477_198.867_505_5 + t * (0.0087414 + t * (1.0 / 69_699.0 - t / 14_712_000.0)));
    let arg_lat = 93.2720950
        + t * (483_202.017_523_3 + t * (-0.0036539 + t * (-1.0 / 3_526_000.0 + t / 863_310_000.0)));

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    // Eccentricity of Earth's orbit scales every term carrying M.
    let ecc = 1.0 - t * (0.002516 + t * 0.0000074);

    let args = [
        normalize_360(elong).to_radians(),
        normalize_360(sun_anom).to_radians(),
        normalize_360(moon_anom).to_radians(),
        normalize_360(arg_lat).to_radians(),
    ];
    let argument = |row: &[i32]| -> (f64, f64) {
        let angle = row[0] as f64 * args[0]
            + row[1] as f64 * args[1]
            + row[2] as f64 * args[2]
            + row[3] as f64 * args[3];
        (angle, ecc.powi(row[1].abs()))
    };

    let mut sum_l = 0.0_f64;
    let mut sum_r = 0.0_f64;
    for row in &LON_DIST_TERMS {
        let (angle, scale) = argument(&row[..]);
        sum_l += row[4] as f64 * scale * angle.sin();
        sum_r += row[5] as f64 * scale * angle.cos();
    }
    let mut sum_b = 0.0_f64;
    for row in &LAT_TERMS {
        let (angle, scale) = argument(&row[..]);
        sum_b += row[4] as f64 * scale * angle.sin();
    }

    let lp = normalize_360(mean_lon).to_radians();
    let f = args[3];
    let mp = args[2];
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin() + 382.0 * a3.sin() + 175.0 * (a1 - f).sin() + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    LunarPosition {
        longitude_deg: normalize_360(mean_lon + sum_l / 1e6),
        latitude_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}
