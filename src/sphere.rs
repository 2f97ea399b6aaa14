//! Great-circle angular separation on the celestial sphere.
//!
//! Uses the Vincenty formula, which stays numerically accurate at all
//! separations — including the very small ones (sub-arcsecond) that matter
//! when matching against a curated double-star catalog, where the
//! law-of-cosines form loses precision.

const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;
const RAD_TO_DEG: f64 = 57.29577951308232087679815;
const ARCSEC_PER_DEG: f64 = 3600.0;

/// Compute the angular distance between two points on the sphere, in degrees.
///
/// # Arguments
/// * `ra1_deg`, `dec1_deg` - First point in degrees
/// * `ra2_deg`, `dec2_deg` - Second point in degrees
///
/// # Returns
/// Angular distance in degrees, in `[0, 180]`.
pub fn angular_separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let (sin_dec1, cos_dec1) = libm::sincos(dec1_deg * DEG_TO_RAD);
    let (sin_dec2, cos_dec2) = libm::sincos(dec2_deg * DEG_TO_RAD);
    let delta_ra = (ra2_deg - ra1_deg) * DEG_TO_RAD;

    vincenty_angular_separation(sin_dec1, cos_dec1, sin_dec2, cos_dec2, delta_ra) * RAD_TO_DEG
}

/// Compute the angular distance between two points on the sphere, in arcseconds.
pub fn angular_separation_arcsec(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    angular_separation_deg(ra1_deg, dec1_deg, ra2_deg, dec2_deg) * ARCSEC_PER_DEG
}

#[inline]
fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let dist = angular_separation_deg(100.0, -10.0, 100.0, -10.0);
        assert!(dist.abs() < 1e-12);
    }

    #[test]
    fn test_90_degrees_along_equator() {
        let dist = angular_separation_deg(0.0, 0.0, 90.0, 0.0);
        assert!((dist - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_pole_to_equator() {
        let dist = angular_separation_deg(0.0, 90.0, 0.0, 0.0);
        assert!((dist - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_antipodes() {
        let dist = angular_separation_deg(0.0, 0.0, 180.0, 0.0);
        assert!((dist - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_ra_wraparound() {
        // 0.2 degrees of RA straddling the 0/360 boundary
        let dist = angular_separation_deg(359.9, 0.0, 0.1, 0.0);
        assert!((dist - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_ra_compression_near_pole() {
        // At dec 89.9, a full degree of RA spans far less than a degree of sky
        let dist = angular_separation_deg(10.0, 89.9, 11.0, 89.9);
        assert!(dist < 0.01, "expected compressed separation, got {}", dist);
    }

    #[test]
    fn test_small_separation_arcsec() {
        // ~0.8 arcsec true separation near the equator
        let sep = angular_separation_arcsec(100.0, -10.0, 100.0002, -10.0001);
        assert!(
            sep > 0.7 && sep < 0.9,
            "expected ~0.8 arcsec, got {}",
            sep
        );
    }

    #[test]
    fn test_symmetry() {
        let a = angular_separation_deg(12.3, 45.6, 13.1, 44.9);
        let b = angular_separation_deg(13.1, 44.9, 12.3, 45.6);
        assert!((a - b).abs() < 1e-14);
    }
}
