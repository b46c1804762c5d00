// src/models/vehicle.rs

use std::fmt;
use std::io::Write;

use log::{info, warn};
use rand::Rng;

use crate::models::position::GeoPosition;
use crate::simulation::context::MissionContext;
use crate::simulation::error::MissionError;

/// 投下フックの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookState {
    #[default]
    Closed,
    Opening,
    Released,
}

impl fmt::Display for HookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            HookState::Closed => "CLOSED",
            HookState::Opening => "OPENING",
            HookState::Released => "RELEASED",
        };
        f.write_str(token)
    }
}

/// 機体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleStatus {
    pub armed: bool,
    pub flying: bool,
    pub hook: HookState,
}

/// 飛行区間の結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub altitude: f64,    // 実際に使った高度（m AGL）
    pub travel_time: f64, // 所要時間（シミュレーション秒）
}

/// 要求高度を上限で頭打ちにする
///
/// # 引数
/// - `requested`: 要求高度（m）
/// - `ceiling`: 上限高度（m）
///
/// # 戻り値
/// - `requested` と `ceiling` の小さい方
pub fn clamp_altitude(requested: f64, ceiling: f64) -> f64 {
    requested.min(ceiling)
}

/// シミュレーション上の機体
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub home: GeoPosition,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new<W: Write, R: Rng>(
        home: GeoPosition,
        ctx: &mut MissionContext<W, R>,
    ) -> Result<Self, MissionError> {
        let vehicle = Vehicle {
            home,
            status: VehicleStatus::default(),
        };
        ctx.say(&format!("MAVLinkVehicle Initialized. Home Base: {}", home))?;
        ctx.record("initialized", &vehicle.status);
        Ok(vehicle)
    }

    /// アームして自動離陸する
    ///
    /// # 戻り値
    /// - 上限で頭打ちにした後の離陸高度
    pub fn arm_and_takeoff<W: Write, R: Rng>(
        &mut self,
        target_altitude: f64,
        ctx: &mut MissionContext<W, R>,
    ) -> Result<f64, MissionError> {
        ctx.say("\n[COMMAND] Pre-Flight Checks...")?;
        ctx.wait(ctx.params.delays.preflight)?;

        let ceiling = ctx.params.max_altitude_m;
        if target_altitude > ceiling {
            warn!("Takeoff altitude {}m exceeds ceiling {}m", target_altitude, ceiling);
            ctx.say(&format!(
                "[ERROR] Altitude limit exceeded! Capping takeoff at {:.1}m.",
                ceiling
            ))?;
        }
        let altitude = clamp_altitude(target_altitude, ceiling);

        ctx.say("[COMMAND] Arming motors...")?;
        self.status.armed = true;
        ctx.record("armed", &self.status);
        ctx.wait(ctx.params.delays.arming)?;

        ctx.say(&format!(
            "[COMMAND] Taking off to target altitude: {:.1}m AGL...",
            altitude
        ))?;
        self.status.flying = true;
        ctx.record("takeoff", &self.status);
        ctx.wait(ctx.params.delays.takeoff)?;
        ctx.say(&format!("[STATUS] Reached altitude: {:.1}m.", altitude))?;
        info!("Airborne at {:.1}m", altitude);

        Ok(altitude)
    }

    /// 指定座標へ飛行する
    pub fn fly_to_waypoint<W: Write, R: Rng>(
        &mut self,
        target: GeoPosition,
        altitude: f64,
        ctx: &mut MissionContext<W, R>,
    ) -> Result<Leg, MissionError> {
        ctx.say(&format!(
            "\n[COMMAND] Setting mission: Fly to Lat={:.6}, Lon={:.6} at {:.1}m AGL.",
            target.latitude, target.longitude, altitude
        ))?;

        let ceiling = ctx.params.max_altitude_m;
        if altitude > ceiling {
            warn!("Waypoint altitude {}m exceeds ceiling {}m", altitude, ceiling);
            ctx.say(&format!(
                "[WARNING] Target altitude of {:.1}m is too high. Capping at {:.1}m.",
                altitude, ceiling
            ))?;
        }
        let altitude = clamp_altitude(altitude, ceiling);

        let travel_time = ctx.draw_duration(ctx.params.cruise_time_s);
        ctx.say(&format!(
            "[STATUS] Cruising at {:.1}m. Estimated travel time: {:.1}s...",
            altitude, travel_time
        ))?;
        ctx.wait(travel_time)?;
        ctx.say("[STATUS] Target coordinates reached.")?;
        ctx.record("waypoint_reached", &self.status);

        Ok(Leg {
            altitude,
            travel_time,
        })
    }

    /// サーボを動かして荷物を投下する
    pub fn trigger_payload_hook<W: Write, R: Rng>(
        &mut self,
        ctx: &mut MissionContext<W, R>,
    ) -> Result<(), MissionError> {
        ctx.say("\n[COMMAND] Triggering servo mechanism (Robotic Hook) for package drop...")?;
        self.status.hook = HookState::Opening;
        ctx.record("hook_opening", &self.status);
        ctx.wait(ctx.params.delays.hook_opening)?;

        self.status.hook = HookState::Released;
        ctx.record("hook_released", &self.status);
        ctx.say("[STATUS] Package has been successfully dropped and hook is released.")?;
        ctx.wait(ctx.params.delays.post_release)?;
        Ok(())
    }

    /// RTL（自動帰還・着陸）
    pub fn return_to_home<W: Write, R: Rng>(
        &mut self,
        ctx: &mut MissionContext<W, R>,
    ) -> Result<Leg, MissionError> {
        ctx.say("\n[COMMAND] Initiating Return To Home (RTL) mission.")?;
        let altitude = clamp_altitude(ctx.params.return_altitude_m, ctx.params.max_altitude_m);
        let travel_time = ctx.draw_duration(ctx.params.return_time_s);
        ctx.say(&format!(
            "[STATUS] Returning to Home Base ({}) at {:.0}m AGL. Travel time: {:.1}s...",
            self.home, altitude, travel_time
        ))?;
        ctx.wait(travel_time)?;

        ctx.say("[STATUS] Reached Home location. Initiating auto-landing sequence.")?;
        self.status.flying = false;
        ctx.record("landing", &self.status);
        ctx.wait(ctx.params.delays.landing)?;

        ctx.say("[STATUS] Landed safely at Home Base.")?;
        self.status.armed = false;
        ctx.record("disarmed", &self.status);
        info!("Landed after RTL of {:.1}s", travel_time);

        Ok(Leg {
            altitude,
            travel_time,
        })
    }
}
