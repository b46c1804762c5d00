// src/simulation/load_parameters.rs

use std::fs::File;
use std::io::{ErrorKind, Read};

use log::{info, warn};
use serde_yaml::from_reader;

use crate::config::{MissionParameters, Scenario};
use crate::simulation::error::MissionError;

/// ミッションパラメータの読み込み（検証込み）
///
/// ファイルが存在しなければ既定値を使う。壊れたファイルはエラーとする。
pub fn load_mission_parameters(path: &str) -> Result<MissionParameters, MissionError> {
    match open_if_exists(path)? {
        Some(file) => parse_mission_parameters(file),
        None => Ok(MissionParameters::default()),
    }
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, MissionError> {
    match open_if_exists(path)? {
        Some(file) => parse_scenario(file),
        None => Ok(Scenario::default()),
    }
}

/// 任意のリーダからミッションパラメータを解析する
pub fn parse_mission_parameters<R: Read>(reader: R) -> Result<MissionParameters, MissionError> {
    let params: MissionParameters = from_reader(reader)?;
    params.validate()?;
    Ok(params)
}

/// 任意のリーダからシナリオを解析する（検証込み）
pub fn parse_scenario<R: Read>(reader: R) -> Result<Scenario, MissionError> {
    let scenario: Scenario = from_reader(reader)?;
    scenario.validate()?;
    Ok(scenario)
}

fn open_if_exists(path: &str) -> Result<Option<File>, MissionError> {
    match File::open(path) {
        Ok(file) => {
            info!("Loading {}", path);
            Ok(Some(file))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using built-in defaults", path);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
