// src/config/scenario.rs

use serde::Deserialize;

use crate::simulation::error::MissionError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub home: [f64; 3],          // [緯度, 経度, 高度]
    pub delivery: [f64; 3],      // [緯度, 経度, 高度]（高度は巡航の要求高度）
    pub takeoff_altitude_m: f64, // 離陸の要求高度（m AGL）
    pub seed: Option<u64>,
    pub event_log: Option<String>, // 指定したときだけイベントを CSV に書き出す
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            home: [52.198570, 55.617311, 0.0],
            delivery: [52.200500, 55.618500, 10.0],
            takeoff_altitude_m: 10.0,
            seed: None,
            event_log: None,
        }
    }
}

impl Scenario {
    /// 座標と高度がすべて有限の値か検証する
    pub fn validate(&self) -> Result<(), MissionError> {
        let values = [
            ("home.latitude", self.home[0]),
            ("home.longitude", self.home[1]),
            ("home.altitude", self.home[2]),
            ("delivery.latitude", self.delivery[0]),
            ("delivery.longitude", self.delivery[1]),
            ("delivery.altitude", self.delivery[2]),
            ("takeoff_altitude_m", self.takeoff_altitude_m),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(MissionError::InvalidParameter {
                    name,
                    reason: "must be a finite number".to_string(),
                });
            }
        }
        Ok(())
    }
}
