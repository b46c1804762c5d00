// src/models/position.rs

use std::fmt;

/// 地理座標
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,  // 緯度（度）
    pub longitude: f64, // 経度（度）
    pub altitude: f64,  // 高度（m）
}

impl From<[f64; 3]> for GeoPosition {
    fn from(triple: [f64; 3]) -> Self {
        GeoPosition {
            latitude: triple[0],
            longitude: triple[1],
            altitude: triple[2],
        }
    }
}

/// `緯度, 経度` を小数点以下 6 桁で表示する
impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triple_and_display() {
        let position = GeoPosition::from([52.19857, 55.617311, 0.0]);
        assert_eq!(position.latitude, 52.19857);
        assert_eq!(position.altitude, 0.0);
        assert_eq!(position.to_string(), "52.198570, 55.617311");
    }
}
