// src/config/parameters.rs

use serde::Deserialize;

use crate::simulation::error::MissionError;

/// 一様分布で引く所要時間の範囲（秒）
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        TimeRange { min, max }
    }
}

/// 各ステップの固定待ち時間（シミュレーション秒）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StepDelays {
    pub preflight: f64,    // 飛行前点検
    pub arming: f64,       // モーターのアーム
    pub takeoff: f64,      // 離陸上昇
    pub recognition: f64,  // 画像認識
    pub hook_opening: f64, // フック開放
    pub post_release: f64, // 投下後の待機
    pub landing: f64,      // 自動着陸
}

impl Default for StepDelays {
    fn default() -> Self {
        StepDelays {
            preflight: 1.0,
            arming: 2.0,
            takeoff: 5.0,
            recognition: 3.0,
            hook_opening: 2.0,
            post_release: 1.0,
            landing: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MissionParameters {
    pub max_altitude_m: f64,           // 飛行高度の上限（m AGL）
    pub recognition_success_rate: f64, // 認識成功確率
    pub cruise_time_s: TimeRange,      // 目的地までの飛行時間
    pub return_time_s: TimeRange,      // RTL の飛行時間
    pub return_altitude_m: f64,        // RTL 巡航高度（m AGL）
    pub time_scale: f64,               // シミュレーション1秒あたりの実時間（秒）
    pub delays: StepDelays,
}

impl Default for MissionParameters {
    fn default() -> Self {
        MissionParameters {
            max_altitude_m: 10.0,
            recognition_success_rate: 0.8,
            cruise_time_s: TimeRange::new(5.0, 15.0),
            return_time_s: TimeRange::new(10.0, 25.0),
            return_altitude_m: 10.0,
            time_scale: 1.0,
            delays: StepDelays::default(),
        }
    }
}

impl MissionParameters {
    /// パラメータの妥当性を検証する
    ///
    /// # 戻り値
    /// - 不正な値があれば最初に見つかったものを `MissionError::InvalidParameter` で返す
    pub fn validate(&self) -> Result<(), MissionError> {
        if !self.max_altitude_m.is_finite() || self.max_altitude_m <= 0.0 {
            return Err(invalid("max_altitude_m", "must be a positive finite number"));
        }
        if !(0.0..=1.0).contains(&self.recognition_success_rate) {
            return Err(invalid("recognition_success_rate", "must be within [0, 1]"));
        }
        validate_range("cruise_time_s", &self.cruise_time_s)?;
        validate_range("return_time_s", &self.return_time_s)?;
        if !self.return_altitude_m.is_finite() || self.return_altitude_m < 0.0 {
            return Err(invalid("return_altitude_m", "must be a non-negative finite number"));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(invalid("time_scale", "must be a non-negative finite number"));
        }

        let d = &self.delays;
        let delays = [
            ("delays.preflight", d.preflight),
            ("delays.arming", d.arming),
            ("delays.takeoff", d.takeoff),
            ("delays.recognition", d.recognition),
            ("delays.hook_opening", d.hook_opening),
            ("delays.post_release", d.post_release),
            ("delays.landing", d.landing),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(name, "must be a non-negative finite number"));
            }
        }
        Ok(())
    }
}

fn validate_range(name: &'static str, range: &TimeRange) -> Result<(), MissionError> {
    if !range.min.is_finite() || !range.max.is_finite() || range.min < 0.0 {
        return Err(invalid(name, "bounds must be non-negative finite numbers"));
    }
    if range.min > range.max {
        return Err(invalid(name, "min must not exceed max"));
    }
    Ok(())
}

fn invalid(name: &'static str, reason: &str) -> MissionError {
    MissionError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let params = MissionParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.max_altitude_m, 10.0);
        assert_eq!(params.recognition_success_rate, 0.8);
        assert_eq!(params.cruise_time_s, TimeRange::new(5.0, 15.0));
        assert_eq!(params.return_time_s, TimeRange::new(10.0, 25.0));
    }

    #[test]
    fn test_validate_rejects_success_rate_out_of_range() {
        let params = MissionParameters {
            recognition_success_rate: 1.5,
            ..MissionParameters::default()
        };
        match params.validate() {
            Err(MissionError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "recognition_success_rate")
            }
            _ => panic!("Expected MissionError::InvalidParameter"),
        }
    }

    #[test]
    fn test_validate_rejects_inverted_time_range() {
        let params = MissionParameters {
            return_time_s: TimeRange::new(30.0, 10.0),
            ..MissionParameters::default()
        };
        match params.validate() {
            Err(MissionError::InvalidParameter { name, .. }) => assert_eq!(name, "return_time_s"),
            _ => panic!("Expected MissionError::InvalidParameter"),
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_ceiling() {
        let params = MissionParameters {
            max_altitude_m: 0.0,
            ..MissionParameters::default()
        };
        assert!(params.validate().is_err());

        let params = MissionParameters {
            max_altitude_m: f64::NAN,
            ..MissionParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_delay() {
        let mut params = MissionParameters::default();
        params.delays.landing = -1.0;
        match params.validate() {
            Err(MissionError::InvalidParameter { name, .. }) => assert_eq!(name, "delays.landing"),
            _ => panic!("Expected MissionError::InvalidParameter"),
        }
    }
}
