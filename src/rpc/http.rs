use crate::config::Config;
use crate::rpc::{Error, RpcConnection, RpcRequest};
use log::debug;
use serde_json::Value;

const PSK_HEADER: &str = "X-Auth-PSK";

/// Plain-HTTP connection to the TV's `/sony/` services.
pub struct HttpConnection {
    config: Config,
    agent: ureq::Agent,
}

impl HttpConnection {
    pub fn new(config: Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            config,
            agent: builder.build(),
        }
    }
}

impl RpcConnection for HttpConnection {
    fn send(&self, request: &RpcRequest) -> Result<Value, Error> {
        let url = self.config.url(request.service);
        debug!("POST {} {}#{}", url, request.method, request.id);
        let resp = self
            .agent
            .post(&url)
            .set(PSK_HEADER, &self.config.psk)
            .set("Content-Type", "application/json")
            .send_json(request)?;
        let body = resp.into_string()?;
        debug!("response {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}
