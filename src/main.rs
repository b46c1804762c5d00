// src/main.rs

use std::error::Error;
use std::io;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use simulation::context::MissionContext;
use simulation::csv::*;
use simulation::framework::*;
use simulation::load_parameters::*;

mod config;
mod models;
mod simulation;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // 設定とシナリオの読み込み
    let params = load_mission_parameters("config/mission_parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // 乱数源（シード指定があれば再現可能）
    let rng = match scenario.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdout = io::stdout();
    let mut ctx = MissionContext::new(params, stdout.lock(), rng);

    // ミッションの実行
    let report = run_delivery_mission(&scenario, &mut ctx)?;
    info!(
        "Outcome {:?}: takeoff {:.1}m, cruise {:.1}m/{:.1}s, recognition {:?}, released {}, rtl {:?}, total {:.1}s, final {:?}",
        report.outcome,
        report.takeoff_altitude,
        report.cruise.altitude,
        report.cruise.travel_time,
        report.recognition,
        report.payload_released,
        report.return_leg,
        report.elapsed,
        report.final_status
    );

    // イベントログの CSV 出力
    if let Some(path) = &scenario.event_log {
        let mut writer = setup_csv_output(path)?;
        write_events(writer.as_mut(), &ctx.events)?;
        info!("Wrote {} events to {}", ctx.events.len(), path);
    }

    Ok(())
}
