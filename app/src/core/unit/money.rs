use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

//Chilean peso amounts; kept as f64 since the API reports one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct ChileanPesos(pub f64);

impl Display for ChileanPesos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} CLP", self.0)
    }
}

impl From<f64> for ChileanPesos {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<ChileanPesos> for f64 {
    fn from(value: ChileanPesos) -> Self {
        value.0
    }
}
