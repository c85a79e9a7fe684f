mod co2;
mod kilometers;
mod kwh;
mod money;
mod percent;

pub use co2::KilogramsCo2;
pub use kilometers::Kilometers;
pub use kwh::KiloWattHours;
pub use money::ChileanPesos;
pub use percent::Percent;
