use crate::core::math::round_to;
use crate::core::unit::{KiloWattHours, KilogramsCo2, Kilometers};

//Coarse average emission factors
const CAR_KG_CO2_PER_KM: f64 = 0.21;
const GRID_KG_CO2_PER_KWH: f64 = 0.4;
const WEEKS_PER_MONTH: f64 = 4.0;

/// Monthly household CO2 emissions, split by source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonFootprint {
    pub car: KilogramsCo2,
    pub electricity: KilogramsCo2,
    pub total: KilogramsCo2,
}

/// Estimates the monthly footprint from weekly car travel and monthly
/// electricity consumption. All values are rounded to two decimal places,
/// the total always equals the sum of the rounded parts.
pub fn estimate(weekly_car_distance: Kilometers, monthly_electricity: KiloWattHours) -> CarbonFootprint {
    let car = KilogramsCo2(round_to(weekly_car_distance.0 * CAR_KG_CO2_PER_KM * WEEKS_PER_MONTH, 2));
    let electricity = KilogramsCo2(round_to(monthly_electricity.0 * GRID_KG_CO2_PER_KWH, 2));
    let total = KilogramsCo2(round_to((car + electricity).0, 2));

    CarbonFootprint { car, electricity, total }
}
