use actix_web::HttpResponse;
use serde_json::json;

pub async fn index_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "API is running" }))
}
