use crate::endpoint::{endpoint, Operation};
use crate::rpc::{error_code, has_result, RpcConnection, RpcRequest};
use crate::tv::{TVConnection, VolumeOperation};
use log::{debug, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, Write};

const SPEAKER_TARGET: &str = "speaker";

/// One entry of getVolumeInformation's result, one per audio output.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VolumeInformation {
    pub target: String,
    pub volume: i64,
}

pub struct BraviaTV<C: RpcConnection> {
    conn: C,
}

/// The one-line rendering of a response's `result`, if it has one.
pub fn render_result(content: &Value) -> Option<String> {
    content.get("result").map(|result| result.to_string())
}

pub fn write_content(out: &mut impl Write, content: Option<&Value>) -> io::Result<()> {
    match content.and_then(render_result) {
        Some(line) => writeln!(out, "{}", line),
        None => Ok(()),
    }
}

pub fn print_content(content: Option<&Value>) {
    if let Err(err) = write_content(&mut io::stdout().lock(), content) {
        debug!("could not print result: {}", err);
    }
}

// Only the first speaker record is decoded; other outputs may look like anything.
fn speaker_volume(content: &Value) -> Option<i64> {
    let record = content
        .get("result")?
        .get(0)?
        .as_array()?
        .iter()
        .find(|r| r.get("target").and_then(Value::as_str) == Some(SPEAKER_TARGET))?;
    match VolumeInformation::deserialize(record) {
        Ok(info) => Some(info.volume),
        Err(err) => {
            debug!("unexpected {} record {}: {}", SPEAKER_TARGET, record, err);
            None
        }
    }
}

impl<C: RpcConnection> BraviaTV<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Sends one request. Transport failures are printed and yield None; an
    /// `error` reply is printed but still returned.
    pub fn call(&self, request: &RpcRequest) -> Option<Value> {
        match self.conn.send(request) {
            Ok(content) => {
                if let Some(err) = content.get("error") {
                    println!("error: {}", err);
                    println!("id: {}", content.get("id").unwrap_or(&Value::Null));
                    if let Some(code) = error_code(&content) {
                        debug!("{}#{} failed with {:?}", request.method, request.id, code);
                    }
                }
                Some(content)
            }
            Err(err) => {
                println!("error: {}", err);
                None
            }
        }
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    fn call_op(&self, op: Operation) -> Option<Value> {
        self.call(&endpoint(op).request())
    }
}

impl<C: RpcConnection> TVConnection for BraviaTV<C> {
    fn power_status(&self) -> Option<Value> {
        self.call_op(Operation::GetPower)
    }

    fn on_off(&self, on: bool) {
        self.call_op(if on {
            Operation::SetPowerOn
        } else {
            Operation::SetPowerOff
        });
    }

    fn volume_information(&self) -> Option<Value> {
        self.call_op(Operation::GetVolume)
    }

    fn volume_change(&self, operation: VolumeOperation) {
        let content = match self.volume_information() {
            Some(content) if has_result(&content) => content,
            _ => return,
        };
        let volume = match speaker_volume(&content) {
            Some(volume) => volume,
            None => {
                debug!("no {} target in volume information", SPEAKER_TARGET);
                return;
            }
        };
        let new_volume = operation.apply(volume);
        info!("{} volume {} -> {}", SPEAKER_TARGET, volume, new_volume);
        let request = endpoint(Operation::SetVolume).request_with(json!({
            "volume": new_volume.to_string(),
            "target": SPEAKER_TARGET,
        }));
        self.call(&request);
    }

    fn mute(&self, mute: bool) {
        self.call_op(if mute {
            Operation::SetMuteOn
        } else {
            Operation::SetMuteOff
        });
    }
}
