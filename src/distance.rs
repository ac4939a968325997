use num_traits::Float;

/// Possible distance metrics used to weight the edge between two points on a sphere.
/// Points are `[latitude, longitude]` pairs in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Great-circle distance by the spherical law of cosines.
    GreatCircle,
    /// Great-circle distance by the haversine formula. Better conditioned for points that
    /// are very close together.
    Haversine,
}

impl DistanceMetric {
    /// The distance between two points on a sphere of the given radius.
    pub fn calc_dist<T: Float>(&self, a: &[T; 2], b: &[T; 2], radius: T) -> T {
        match *self {
            Self::GreatCircle => great_circle_distance(a, b, radius),
            Self::Haversine => haversine_distance(a, b, radius),
        }
    }

    /// The distance between two points truncated to an integer edge weight.
    pub fn calc_weight<T: Float>(&self, a: &[T; 2], b: &[T; 2], radius: T) -> u32 {
        truncate_to_weight(self.calc_dist(a, b, radius))
    }
}

pub(crate) fn great_circle_distance<T: Float>(a: &[T; 2], b: &[T; 2], radius: T) -> T {
    let (lat1, lat2) = (a[0].to_radians(), b[0].to_radians());
    let delta_lon = (b[1] - a[1]).to_radians();
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
    // Rounding can push identical points just past 1
    radius * cos_angle.max(-T::one()).min(T::one()).acos()
}

pub(crate) fn haversine_distance<T: Float>(a: &[T; 2], b: &[T; 2], radius: T) -> T {
    let two = T::one() + T::one();
    let (lat1, lat2) = (a[0].to_radians(), b[0].to_radians());
    let half_delta_lat = (lat2 - lat1) / two;
    let half_delta_lon = (b[1] - a[1]).to_radians() / two;
    let h = half_delta_lat.sin().powi(2) + lat1.cos() * lat2.cos() * half_delta_lon.sin().powi(2);
    two * radius * h.min(T::one()).sqrt().asin()
}

fn truncate_to_weight<T: Float>(dist: T) -> u32 {
    // Non-finite distances only come from non-finite coordinates, which validation rejects
    dist.trunc().to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOSTON: [f64; 2] = [42.3601, -71.0589];
    const SEATTLE: [f64; 2] = [47.6062, -122.3321];
    const NEW_YORK: [f64; 2] = [40.7128, -74.0060];

    #[test]
    fn identical_points_are_zero_apart() {
        for metric in [DistanceMetric::GreatCircle, DistanceMetric::Haversine] {
            assert_eq!(0, metric.calc_weight(&BOSTON, &BOSTON, 3963.0));
        }
    }

    #[test]
    fn boston_to_seattle() {
        let dist = DistanceMetric::GreatCircle.calc_dist(&BOSTON, &SEATTLE, 3963.0);
        assert!((dist - 2491.0).abs() < 5.0, "{dist}");
        let dist = DistanceMetric::Haversine.calc_dist(&BOSTON, &SEATTLE, 3963.0);
        assert!((dist - 2491.0).abs() < 5.0, "{dist}");
    }

    #[test]
    fn metrics_agree_on_short_distances() {
        let cosines = DistanceMetric::GreatCircle.calc_dist(&BOSTON, &NEW_YORK, 3963.0);
        let haversine = DistanceMetric::Haversine.calc_dist(&BOSTON, &NEW_YORK, 3963.0);
        assert!((cosines - haversine).abs() < 0.01);
        assert!((cosines - 190.0).abs() < 3.0, "{cosines}");
    }

    #[test]
    fn distance_is_symmetric() {
        let there = DistanceMetric::GreatCircle.calc_weight(&BOSTON, &SEATTLE, 3963.0);
        let back = DistanceMetric::GreatCircle.calc_weight(&SEATTLE, &BOSTON, 3963.0);
        assert_eq!(there, back);
    }

    #[test]
    fn city_coordinates_feed_metrics() {
        let boston = crate::City::new("Boston", BOSTON[0], BOSTON[1]);
        let seattle = crate::City::new("Seattle", SEATTLE[0], SEATTLE[1]);
        let weight = DistanceMetric::Haversine.calc_weight(&boston.coords(), &seattle.coords(), 3963.0);
        assert_eq!(
            DistanceMetric::Haversine.calc_weight(&BOSTON, &SEATTLE, 3963.0),
            weight
        );
    }

    #[test]
    fn weights_are_truncated() {
        assert_eq!(12, truncate_to_weight(12.99_f64));
        assert_eq!(0, truncate_to_weight(0.4_f32));
    }
}
