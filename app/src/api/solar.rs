use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use super::{ApiError, ensure_non_negative};
use crate::calculator::region::Region;
use crate::calculator::solar::{self, SolarSavings};
use crate::core::unit::{ChileanPesos, KiloWattHours, Percent};

#[derive(Debug, Clone, Deserialize)]
pub struct SolarSavingsRequest {
    monthly_kwh: f64,
    region: Region,
    #[serde(default = "default_cost_per_kwh")]
    cost_per_kwh: f64,
}

fn default_cost_per_kwh() -> f64 {
    solar::DEFAULT_COST_PER_KWH.0
}

#[derive(Debug, Serialize)]
pub struct SolarSavingsResponse {
    region: Region,
    radiation_factor: f64,
    effective_coverage_pct: Percent,
    generated_kwh: KiloWattHours,
    monthly_savings: ChileanPesos,
    annual_savings: ChileanPesos,
}

impl SolarSavingsRequest {
    fn validate(&self) -> Result<(), ApiError> {
        ensure_non_negative("monthly_kwh", self.monthly_kwh)?;
        ensure_non_negative("cost_per_kwh", self.cost_per_kwh)
    }
}

impl From<SolarSavings> for SolarSavingsResponse {
    fn from(savings: SolarSavings) -> Self {
        Self {
            region: savings.region,
            radiation_factor: savings.radiation_factor,
            effective_coverage_pct: savings.effective_coverage,
            generated_kwh: savings.generated,
            monthly_savings: savings.monthly_savings,
            annual_savings: savings.annual_savings,
        }
    }
}

pub async fn solar_savings_handler(body: web::Json<SolarSavingsRequest>) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let savings = solar::estimate(
        KiloWattHours(request.monthly_kwh),
        request.region,
        ChileanPesos(request.cost_per_kwh),
    );

    Ok(HttpResponse::Ok().json(SolarSavingsResponse::from(savings)))
}

pub async fn regions_handler() -> HttpResponse {
    #[derive(Serialize)]
    struct Row {
        region: Region,
        radiation_factor: f64,
    }

    let rows: Vec<Row> = Region::variants()
        .iter()
        .map(|&region| Row {
            region,
            radiation_factor: region.radiation_factor(),
        })
        .collect();

    HttpResponse::Ok().json(rows)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    use crate::api;

    #[actix_web::test]
    async fn test_computes_savings_with_default_price() {
        let app = test::init_service(App::new().configure(api::configure)).await;

        let req = test::TestRequest::post()
            .uri("/solar-savings")
            .set_json(json!({ "monthly_kwh": 500.0, "region": "Metropolitana" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_json_eq!(
            body,
            json!({
                "region": "Metropolitana",
                "radiation_factor": 0.75,
                "effective_coverage_pct": 60.0,
                "generated_kwh": 300.0,
                "monthly_savings": 45000.0,
                "annual_savings": 540000.0,
            })
        );
    }

    #[actix_web::test]
    async fn test_derates_southern_regions() {
        let app = test::init_service(App::new().configure(api::configure)).await;

        let req = test::TestRequest::post()
            .uri("/solar-savings")
            .set_json(json!({ "monthly_kwh": 200.0, "region": "Magallanes", "cost_per_kwh": 150.0 }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["effective_coverage_pct"], json!(28.0));
        assert_eq!(body["generated_kwh"], json!(56.0));
    }

    #[actix_web::test]
    async fn test_rejects_unknown_region() {
        let app = test::init_service(App::new().configure(api::configure)).await;

        let req = test::TestRequest::post()
            .uri("/solar-savings")
            .set_json(json!({ "monthly_kwh": 500.0, "region": "Narnia" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_rejects_negative_consumption() {
        let app = test::init_service(App::new().configure(api::configure)).await;

        let req = test::TestRequest::post()
            .uri("/solar-savings")
            .set_json(json!({ "monthly_kwh": -1.0, "region": "Maule" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["field"], json!("monthly_kwh"));
    }

    #[actix_web::test]
    async fn test_lists_all_regions_north_to_south() {
        let app = test::init_service(App::new().configure(api::configure)).await;

        let req = test::TestRequest::get().uri("/solar-savings/regions").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let rows = body.as_array().expect("array of regions");
        assert_eq!(rows.len(), 15);
        assert_json_eq!(
            rows[0],
            json!({ "region": "Arica y Parinacota", "radiation_factor": 1.0 })
        );
        assert_json_eq!(
            rows[14],
            json!({ "region": "Magallanes", "radiation_factor": 0.35 })
        );
    }
}
