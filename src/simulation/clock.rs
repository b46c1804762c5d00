// src/simulation/clock.rs

use std::thread;
use std::time::Duration;

use crate::simulation::error::MissionError;

/// ミッション時間の時計
///
/// `wait` でシミュレーション時間を進め、`time_scale` 倍の実時間だけスリープする。
/// `time_scale` が 0 のときはスリープしない。
/// 実時間が `Duration` で表せない場合はエラーを返し、時刻は進めない。
#[derive(Debug, Clone, PartialEq)]
pub struct MissionClock {
    pub time_scale: f64,
    pub elapsed: f64, // 経過したシミュレーション時間（秒）
}

impl MissionClock {
    pub fn new(time_scale: f64) -> Self {
        MissionClock {
            time_scale,
            elapsed: 0.0,
        }
    }

    pub fn wait(&mut self, seconds: f64) -> Result<(), MissionError> {
        if seconds <= 0.0 {
            return Ok(());
        }
        let wall = seconds * self.time_scale;
        let pause = if wall > 0.0 {
            Some(
                Duration::try_from_secs_f64(wall)
                    .map_err(|_| MissionError::WaitOutOfRange { seconds: wall })?,
            )
        } else {
            None
        };
        self.elapsed += seconds;
        if let Some(pause) = pause {
            thread::sleep(pause);
        }
        Ok(())
    }
}
