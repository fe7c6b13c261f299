use serde::{Deserialize, Serialize};

/// Channels every issued token is subscribed to server-side.
pub const CHANNELS: [&str; 2] = ["testchan", "otherchan"];

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub channels: Vec<String>,
}

impl Claims {
    pub fn new(sub: impl Into<String>, exp: i64) -> Self {
        Self {
            sub: sub.into(),
            exp,
            channels: CHANNELS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
