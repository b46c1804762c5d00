// src/simulation/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::context::MissionEvent;
use crate::simulation::error::MissionError;

pub const CSV_HEADER: &str = "time(s),step,armed,flying,hook\n";

/// CSV出力の設定とヘッダーの書き込み
///
/// 親ディレクトリが無ければ作成する。
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, MissionError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(CSV_HEADER.as_bytes())
}

/// CSV行の作成
pub fn create_csv_row(event: &MissionEvent) -> String {
    format!(
        "{:.3},{},{},{},{}\n",
        event.time, event.step, event.armed, event.flying, event.hook
    )
}

/// 全イベントの書き込み
pub fn write_events<W: Write + ?Sized>(
    writer: &mut W,
    events: &[MissionEvent],
) -> Result<(), std::io::Error> {
    for event in events {
        writer.write_all(create_csv_row(event).as_bytes())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::HookState;

    #[test]
    fn test_create_csv_row() {
        let event = MissionEvent {
            time: 12.25,
            step: "hook_opening",
            armed: true,
            flying: true,
            hook: HookState::Opening,
        };
        assert_eq!(create_csv_row(&event), "12.250,hook_opening,true,true,OPENING\n");
    }

    #[test]
    fn test_write_header_and_events() {
        let events = vec![
            MissionEvent {
                time: 0.0,
                step: "initialized",
                armed: false,
                flying: false,
                hook: HookState::Closed,
            },
            MissionEvent {
                time: 3.0,
                step: "armed",
                armed: true,
                flying: false,
                hook: HookState::Closed,
            },
        ];
        let mut buffer: Vec<u8> = Vec::new();
        write_csv_header(&mut buffer).unwrap();
        write_events(&mut buffer, &events).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time(s),step,armed,flying,hook");
        assert_eq!(lines[1], "0.000,initialized,false,false,CLOSED");
        assert_eq!(lines[2], "3.000,armed,true,false,CLOSED");
    }

    #[test]
    fn test_setup_csv_output_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("dlvsim-csv-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("mission_events.csv");

        let events = vec![MissionEvent {
            time: 1.0,
            step: "armed",
            armed: true,
            flying: false,
            hook: HookState::Closed,
        }];
        {
            let mut writer = setup_csv_output(path.to_str().unwrap()).unwrap();
            write_events(writer.as_mut(), &events).unwrap();
        }

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "time(s),step,armed,flying,hook\n1.000,armed,true,false,CLOSED\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
