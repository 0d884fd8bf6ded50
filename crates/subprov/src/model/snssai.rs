use core::fmt;
use serde::{Deserialize, Serialize};

/// Single network slice selection assistance information: a slice/service
/// type plus an optional differentiator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snssai {
    pub sst: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sd: String,
}

impl Snssai {
    pub fn new(sst: i32, sd: impl Into<String>) -> Self {
        Self { sst, sd: sd.into() }
    }

    /// Compact string form used as a mapping key: two hex digits of `sst`
    /// followed by `sd`, e.g. `"01010203"`.
    pub fn key(&self) -> String {
        format!("{:02x}{}", self.sst, self.sd)
    }
}

impl fmt::Display for Snssai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
