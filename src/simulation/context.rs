// src/simulation/context.rs

use std::io::{self, Write};

use log::debug;
use rand::Rng;

use crate::config::{MissionParameters, TimeRange};
use crate::models::vehicle::{HookState, VehicleStatus};
use crate::simulation::clock::MissionClock;
use crate::simulation::error::MissionError;

/// ミッション中の状態変化の記録（CSV 1 行に対応）
#[derive(Debug, Clone, PartialEq)]
pub struct MissionEvent {
    pub time: f64, // シミュレーション時刻（秒）
    pub step: &'static str,
    pub armed: bool,
    pub flying: bool,
    pub hook: HookState,
}

/// ミッション実行に必要なものをまとめた構造体
///
/// - `out`: ステータス文の出力先（通常は標準出力）
/// - `rng`: 飛行時間と認識結果の乱数源
/// - `clock`: シミュレーション時間
/// - `events`: 記録されたイベント
pub struct MissionContext<W: Write, R: Rng> {
    pub params: MissionParameters,
    pub out: W,
    pub rng: R,
    pub clock: MissionClock,
    pub events: Vec<MissionEvent>,
}

impl<W: Write, R: Rng> MissionContext<W, R> {
    pub fn new(params: MissionParameters, out: W, rng: R) -> Self {
        let clock = MissionClock::new(params.time_scale);
        MissionContext {
            params,
            out,
            rng,
            clock,
            events: Vec::new(),
        }
    }

    /// ステータス文を 1 行出力する
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    pub fn wait(&mut self, seconds: f64) -> Result<(), MissionError> {
        self.clock.wait(seconds)
    }

    /// 範囲から一様に所要時間を引く
    pub fn draw_duration(&mut self, range: TimeRange) -> f64 {
        let seconds = self.rng.random_range(range.min..=range.max);
        debug!("Drew duration {:.3}s from [{}, {}]", seconds, range.min, range.max);
        seconds
    }

    /// 認識成功確率でベルヌーイ試行を行う
    pub fn draw_recognition(&mut self) -> bool {
        let success = self.rng.random_bool(self.params.recognition_success_rate);
        debug!(
            "Recognition draw with p={} -> {}",
            self.params.recognition_success_rate, success
        );
        success
    }

    pub fn record(&mut self, step: &'static str, status: &VehicleStatus) {
        debug!(
            "t={:.1}s {}: armed={} flying={} hook={}",
            self.clock.elapsed, step, status.armed, status.flying, status.hook
        );
        self.events.push(MissionEvent {
            time: self.clock.elapsed,
            step,
            armed: status.armed,
            flying: status.flying,
            hook: status.hook,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(params: MissionParameters) -> MissionContext<Vec<u8>, StdRng> {
        MissionContext::new(params, Vec::new(), StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_say_writes_one_line() {
        let mut ctx = context(MissionParameters::default());
        ctx.say("[STATUS] hello").unwrap();
        ctx.say("[STATUS] world").unwrap();
        assert_eq!(String::from_utf8(ctx.out).unwrap(), "[STATUS] hello\n[STATUS] world\n");
    }

    #[test]
    fn test_draw_duration_within_range() {
        let mut ctx = context(MissionParameters::default());
        for _ in 0..200 {
            let seconds = ctx.draw_duration(TimeRange::new(5.0, 15.0));
            assert!((5.0..=15.0).contains(&seconds));
        }
        assert_eq!(ctx.draw_duration(TimeRange::new(3.0, 3.0)), 3.0);
    }

    #[test]
    fn test_draw_recognition_extremes() {
        let mut ctx = context(MissionParameters {
            recognition_success_rate: 1.0,
            ..MissionParameters::default()
        });
        assert!((0..50).all(|_| ctx.draw_recognition()));

        ctx.params.recognition_success_rate = 0.0;
        assert!((0..50).all(|_| !ctx.draw_recognition()));
    }

    #[test]
    fn test_record_uses_simulated_time() {
        let mut ctx = context(MissionParameters {
            time_scale: 0.0,
            ..MissionParameters::default()
        });
        let status = VehicleStatus::default();
        ctx.wait(2.5).unwrap();
        ctx.record("armed", &status);

        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].time, 2.5);
        assert_eq!(ctx.events[0].step, "armed");
        assert_eq!(ctx.events[0].hook, HookState::Closed);
    }
}
