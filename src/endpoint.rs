use crate::rpc::RpcRequest;
use lazy_static::lazy_static;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    GetPower,
    SetPowerOn,
    SetPowerOff,
    GetVolume,
    SetVolume,
    SetMuteOn,
    SetMuteOff,
}

/// One remote operation of the Bravia IP control API.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    // Path segment under /sony/.
    pub service: &'static str,
    pub method: &'static str,
    pub id: u32,
    params: Value,
}

impl Endpoint {
    fn new(service: &'static str, method: &'static str, id: u32, params: Value) -> Self {
        Self {
            service,
            method,
            id,
            params,
        }
    }

    pub fn params(&self) -> &Value {
        &self.params
    }

    /// Builds a request carrying the endpoint's stored params.
    pub fn request(&self) -> RpcRequest {
        self.request_with(self.params.clone())
    }

    /// Builds a request with params computed for this call only. The stored
    /// params are left alone.
    pub fn request_with(&self, params: Value) -> RpcRequest {
        RpcRequest::new(self.service, self.method, self.id, params)
    }
}

lazy_static! {
    static ref ENDPOINTS: HashMap<Operation, Endpoint> = HashMap::from([
        (
            Operation::GetPower,
            Endpoint::new("system", "getPowerStatus", 50, json!({})),
        ),
        (
            Operation::SetPowerOn,
            Endpoint::new("system", "setPowerStatus", 55, json!({"status": true})),
        ),
        (
            Operation::SetPowerOff,
            Endpoint::new("system", "setPowerStatus", 55, json!({"status": false})),
        ),
        (
            Operation::GetVolume,
            Endpoint::new("audio", "getVolumeInformation", 33, json!({})),
        ),
        (
            Operation::SetVolume,
            Endpoint::new("audio", "setAudioVolume", 601, json!({})),
        ),
        (
            Operation::SetMuteOn,
            Endpoint::new("audio", "setAudioMute", 601, json!({"status": true})),
        ),
        (
            Operation::SetMuteOff,
            Endpoint::new("audio", "setAudioMute", 601, json!({"status": false})),
        ),
    ]);
}

pub fn endpoint(op: Operation) -> &'static Endpoint {
    // Every Operation has an entry, checked by test_every_operation_has_endpoint.
    &ENDPOINTS[&op]
}
