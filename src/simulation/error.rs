// src/simulation/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MissionError {
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("パラメータ `{name}` が不正です: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("待ち時間 {seconds} 秒は実時間として扱えません")]
    WaitOutOfRange { seconds: f64 },
}
