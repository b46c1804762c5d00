// src/simulation/framework.rs

use std::io::Write;

use log::info;
use rand::Rng;

use crate::config::Scenario;
use crate::models::recognition::recognize_destination_area;
use crate::models::{GeoPosition, Leg, Vehicle, VehicleStatus};
use crate::simulation::context::MissionContext;
use crate::simulation::error::MissionError;

const RULE_WIDTH: usize = 60;

/// ミッションの結末
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Delivered,
    Aborted,
}

/// ミッション全体の結果
#[derive(Debug, Clone, PartialEq)]
pub struct MissionReport {
    pub outcome: MissionOutcome,
    pub takeoff_altitude: f64,
    pub cruise: Leg,
    pub recognition: Option<bool>, // 飛行中でなければ認識は行わない
    pub payload_released: bool,
    pub return_leg: Option<Leg>,
    pub final_status: VehicleStatus,
    pub elapsed: f64, // 総シミュレーション時間（秒）
}

/// 配送ミッションを最初から最後まで実行する
///
/// 離陸 → 目的地へ飛行 → 認識 → 成功なら投下、失敗なら中止 → 飛行中なら RTL
pub fn run_delivery_mission<W: Write, R: Rng>(
    scenario: &Scenario,
    ctx: &mut MissionContext<W, R>,
) -> Result<MissionReport, MissionError> {
    let home = GeoPosition::from(scenario.home);
    let target = GeoPosition::from(scenario.delivery);
    let rule = "=".repeat(RULE_WIDTH);

    ctx.say(&rule)?;
    ctx.say(" AI-Autonomous Delivery Drone: Mission Start ")?;
    ctx.say(&rule)?;
    ctx.say(&format!(
        "Mission: Delivering parcel to Lat={:.6}, Lon={:.6}",
        target.latitude, target.longitude
    ))?;
    info!("Mission start: home=({}) target=({})", home, target);

    let mut vehicle = Vehicle::new(home, ctx)?;
    let takeoff_altitude = vehicle.arm_and_takeoff(scenario.takeoff_altitude_m, ctx)?;
    let cruise = vehicle.fly_to_waypoint(target, target.altitude, ctx)?;

    let mut recognition = None;
    let mut payload_released = false;
    if vehicle.status.flying {
        let confirmed = recognize_destination_area(ctx)?;
        recognition = Some(confirmed);
        if confirmed {
            vehicle.trigger_payload_hook(ctx)?;
            payload_released = true;
        } else {
            ctx.say("[MISSION ABORT] Destination unsafe. Proceeding to RTL.")?;
            ctx.record("aborted", &vehicle.status);
        }
    }

    let return_leg = if vehicle.status.flying {
        Some(vehicle.return_to_home(ctx)?)
    } else {
        None
    };

    ctx.say("")?;
    ctx.say(&rule)?;
    ctx.say(" Mission Complete. Drone Ready for Next Flight. ")?;
    ctx.say(&rule)?;

    let outcome = if payload_released {
        MissionOutcome::Delivered
    } else {
        MissionOutcome::Aborted
    };
    info!("Mission finished: {:?} after {:.1}s", outcome, ctx.clock.elapsed);

    Ok(MissionReport {
        outcome,
        takeoff_altitude,
        cruise,
        recognition,
        payload_released,
        return_leg,
        final_status: vehicle.status,
        elapsed: ctx.clock.elapsed,
    })
}
