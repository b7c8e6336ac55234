use serde_json::Value;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VolumeOperation {
    Increment,
    Decrement,
}

impl VolumeOperation {
    pub fn apply(self, volume: i64) -> i64 {
        match self {
            Self::Increment => volume + 1,
            Self::Decrement => volume - 1,
        }
    }
}

/// Remote-control operations on a TV. Failures are reported by the
/// implementation and never returned; queries hand back whatever the TV
/// answered, which may carry an `error` instead of a `result`.
pub trait TVConnection {
    fn power_status(&self) -> Option<Value>;
    fn on_off(&self, on: bool);
    fn volume_information(&self) -> Option<Value>;
    fn volume_change(&self, operation: VolumeOperation);
    fn mute(&self, mute: bool);
}
