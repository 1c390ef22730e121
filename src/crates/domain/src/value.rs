use std::fmt::{self, Display};

// Helper macro to define aggregate ID newtypes and common trait impls
macro_rules! define_id {
    ($name:ident $(, $extra:ident)*) => {
        #[derive(Debug, Clone, PartialEq $(, $extra)*)]
        pub struct $name(i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

    };
}

define_id!(ListenerId, Eq, Hash);
define_id!(TrackId, Eq, Hash);
define_id!(PlaybackId, Eq, Hash);
define_id!(LocationId);
define_id!(ActivePlaybackId);

/// 地理坐标值对象
///
/// 纬度、经度均为十进制度。本服务把坐标当作平面直角坐标处理，
/// 不做球面投影换算，距离与去重半径使用同一量纲（度）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 平面欧几里得距离（单位：度）
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_zero_for_same_point() {
        let p = GeoPoint::new(10.5, -20.25);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(10.3, 19.6);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_matches_euclidean_formula() {
        // 3-4-5 直角三角形
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_with_negative_coordinates() {
        let a = GeoPoint::new(-1.0, -1.0);
        let b = GeoPoint::new(2.0, 3.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
