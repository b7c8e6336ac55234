use std::time::Duration;

pub const IP_VAR: &str = "BRAVIA_IP";
pub const PSK_VAR: &str = "BRAVIA_PSK";
pub const TIMEOUT_VAR: &str = "BRAVIA_TIMEOUT";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {0} has invalid value {1:?}")]
    Invalid(&'static str, String),
}

/// Where the TV lives and how to authenticate to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // IP address or hostname, optionally with a port.
    pub host: String,
    pub psk: String,
    // Whole-request timeout. None leaves the HTTP client's defaults alone.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let host = lookup(IP_VAR).ok_or(Error::Missing(IP_VAR))?;
        let psk = lookup(PSK_VAR).ok_or(Error::Missing(PSK_VAR))?;
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let invalid = || Error::Invalid(TIMEOUT_VAR, raw.clone());
                let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
                if secs <= 0.0 {
                    return Err(invalid());
                }
                Some(Duration::try_from_secs_f64(secs).map_err(|_| invalid())?)
            }
            None => None,
        };
        Ok(Config { host, psk, timeout })
    }

    pub fn url(&self, service: &str) -> String {
        format!("http://{}/sony/{}", self.host, service)
    }
}
