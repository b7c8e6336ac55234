pub mod http;

use num_enum::TryFromPrimitive;
use serde::Serialize;
use serde_json::Value;

pub const API_VERSION: &str = "1.0";

/// JSON-RPC envelope for a single call. The service path is not part of
/// the body, it selects the URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RpcRequest {
    #[serde(skip)]
    pub service: &'static str,
    pub method: &'static str,
    pub id: u32,
    pub params: [Value; 1],
    pub version: &'static str,
}

impl RpcRequest {
    pub fn new(service: &'static str, method: &'static str, id: u32, params: Value) -> Self {
        Self {
            service,
            method,
            id,
            params: [params],
            version: API_VERSION,
        }
    }
}

pub fn has_result(content: &Value) -> bool {
    content.get("result").is_some()
}

/// Known values of the first element of an `error` payload.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, TryFromPrimitive)]
pub enum ErrorCode {
    Any = 1,
    Timeout = 2,
    IllegalArgument = 3,
    IllegalRequest = 5,
    IllegalState = 7,
    NoSuchMethod = 12,
    UnsupportedVersion = 14,
    UnsupportedOperation = 15,
    Forbidden = 403,
    DisplayIsTurnedOff = 40005,
}

pub fn error_code(content: &Value) -> Option<ErrorCode> {
    let code = content.get("error")?.get(0)?.as_u64()?;
    ErrorCode::try_from(u32::try_from(code).ok()?).ok()
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] ureq::Transport),
    #[error("HTTP {0} {1}")]
    Status(u16, String),
    #[error("could not read response: {0}")]
    Read(#[from] std::io::Error),
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, resp) => Self::Status(code, resp.status_text().to_string()),
            ureq::Error::Transport(t) => Self::Transport(t),
        }
    }
}

/// Something that can deliver a request to the TV and hand back its reply.
pub trait RpcConnection {
    fn send(&self, request: &RpcRequest) -> Result<Value, Error>;
}
