// src/models/recognition.rs

use std::io::Write;

use log::info;
use rand::Rng;

use crate::simulation::context::MissionContext;
use crate::simulation::error::MissionError;

/// 目的地の画像認識（模擬）
///
/// 認識には `delays.recognition` 秒かかり、`recognition_success_rate` の確率で成功する。
///
/// # 戻り値
/// - 投下してよい場合は`true`
pub fn recognize_destination_area<W: Write, R: Rng>(
    ctx: &mut MissionContext<W, R>,
) -> Result<bool, MissionError> {
    ctx.say("\n[AI/ML] Running visual recognition and confirmation sequence...")?;
    ctx.wait(ctx.params.delays.recognition)?;

    let confirmed = ctx.draw_recognition();
    if confirmed {
        ctx.say("[AI/ML] SUCCESS: Destination confirmed and secure for drop.")?;
    } else {
        ctx.say("[AI/ML] FAILURE: Recognition failed or area is unsafe. Cannot drop.")?;
    }
    info!("Recognition {}", if confirmed { "confirmed" } else { "rejected" });
    Ok(confirmed)
}
