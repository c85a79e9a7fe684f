use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use super::{ApiError, ensure_non_negative};
use crate::calculator::carbon::{self, CarbonFootprint};
use crate::core::unit::{KiloWattHours, KilogramsCo2, Kilometers};

#[derive(Debug, Clone, Deserialize)]
pub struct CarbonFootprintRequest {
    weekly_car_km: f64,
    monthly_electricity_kwh: f64,
}

#[derive(Debug, Serialize)]
pub struct CarbonFootprintResponse {
    car_kg: KilogramsCo2,
    electricity_kg: KilogramsCo2,
    total_kg: KilogramsCo2,
}

impl CarbonFootprintRequest {
    fn validate(&self) -> Result<(), ApiError> {
        ensure_non_negative("weekly_car_km", self.weekly_car_km)?;
        ensure_non_negative("monthly_electricity_kwh", self.monthly_electricity_kwh)
    }
}

impl From<CarbonFootprint> for CarbonFootprintResponse {
    fn from(footprint: CarbonFootprint) -> Self {
        Self {
            car_kg: footprint.car,
            electricity_kg: footprint.electricity,
            total_kg: footprint.total,
        }
    }
}

pub async fn carbon_footprint_handler(body: web::Json<CarbonFootprintRequest>) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let footprint = carbon::estimate(
        Kilometers(request.weekly_car_km),
        KiloWattHours(request.monthly_electricity_kwh),
    );

    Ok(HttpResponse::Ok().json(CarbonFootprintResponse::from(footprint)))
}
