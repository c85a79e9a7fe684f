use std::{fmt::Display, ops::Add};

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct KilogramsCo2(pub f64);

impl Display for KilogramsCo2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg CO2", self.0)
    }
}

impl From<f64> for KilogramsCo2 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<KilogramsCo2> for f64 {
    fn from(value: KilogramsCo2) -> Self {
        value.0
    }
}

impl Add for KilogramsCo2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        KilogramsCo2(self.0 + rhs.0)
    }
}
