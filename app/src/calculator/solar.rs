use crate::core::math::round_to;
use crate::core::unit::{ChileanPesos, KiloWattHours, Percent};

use super::region::Region;

//Fraction of the monthly consumption a rooftop installation covers under
//ideal radiation, before the regional derating
const NOMINAL_PANEL_COVERAGE: f64 = 0.8;

pub const DEFAULT_COST_PER_KWH: ChileanPesos = ChileanPesos(150.0);

const MONTHS_PER_YEAR: f64 = 12.0;

/// Estimated yield and savings of a solar installation in a given region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSavings {
    pub region: Region,
    pub radiation_factor: f64,
    pub effective_coverage: Percent,
    pub generated: KiloWattHours,
    pub monthly_savings: ChileanPesos,
    pub annual_savings: ChileanPesos,
}

pub fn estimate(monthly_consumption: KiloWattHours, region: Region, cost_per_kwh: ChileanPesos) -> SolarSavings {
    let radiation_factor = region.radiation_factor();
    let effective_coverage = NOMINAL_PANEL_COVERAGE * radiation_factor;

    let generated = round_to(monthly_consumption.0 * effective_coverage, 1);
    let monthly_savings = round_to(generated * cost_per_kwh.0, 1);
    //derived from the already rounded monthly value so the annual amount
    //stays an exact multiple of it
    let annual_savings = round_to(monthly_savings * MONTHS_PER_YEAR, 1);

    SolarSavings {
        region,
        radiation_factor,
        effective_coverage: Percent(round_to(effective_coverage * 100.0, 1)),
        generated: KiloWattHours(generated),
        monthly_savings: ChileanPesos(monthly_savings),
        annual_savings: ChileanPesos(annual_savings),
    }
}
