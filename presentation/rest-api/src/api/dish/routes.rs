use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::dish::use_cases::identify::{IdentifyDishParams, IdentifyDishUseCase};

use crate::api::dish::dto::{DishIdentificationResponse, IdentifyDishRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DishApi {
    identify_use_case: Arc<dyn IdentifyDishUseCase>,
}

impl DishApi {
    pub fn new(identify_use_case: Arc<dyn IdentifyDishUseCase>) -> Self {
        Self { identify_use_case }
    }
}

/// Dish API
///
/// Endpoints for recognising dishes in food photos.
#[OpenApi]
impl DishApi {
    /// Identify a dish from a photo
    ///
    /// Returns the dish name and a confidence between 0 and 1. The photo is
    /// validated before any recognition happens.
    #[oai(path = "/dishes/identify", method = "post", tag = "ApiTags::Dishes")]
    async fn identify_dish(&self, body: Json<IdentifyDishRequest>) -> IdentifyDishResponse {
        match self
            .identify_use_case
            .execute(IdentifyDishParams {
                photo_data_uri: body.0.photo_data_uri,
            })
            .await
        {
            Ok(identification) => IdentifyDishResponse::Ok(Json(identification.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => IdentifyDishResponse::BadRequest(json),
                    502 => IdentifyDishResponse::BadGateway(json),
                    _ => IdentifyDishResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IdentifyDishResponse {
    #[oai(status = 200)]
    Ok(Json<DishIdentificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use business::application::dish::identify::IdentifyDishUseCaseImpl;
    use business::domain::photo::policy::PhotoPolicy;
    use demo::StaticDishIdentifier;
    use logger::TracingLogger;
    use poem::EndpointExt;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::middleware::SizeLimit;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::api::error::size_limit_rejection;
    use crate::config::recognition_config::RecognitionConfig;

    const JPEG_DATA_URI: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

    fn test_client(identifier: StaticDishIdentifier) -> TestClient<Route> {
        let use_case = Arc::new(IdentifyDishUseCaseImpl {
            identifier: Arc::new(identifier),
            policy: PhotoPolicy::default(),
            timeout: Duration::from_secs(5),
            logger: Arc::new(TracingLogger::default()),
        });
        let service = OpenApiService::new(DishApi::new(use_case), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_return_dish_name_and_confidence() {
        let cli = test_client(StaticDishIdentifier::default());

        let resp = cli
            .post("/dishes/identify")
            .body_json(&json!({ "photoDataUri": JPEG_DATA_URI }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("dishName").assert_string("Caprese Salad");
        body.get("confidence").assert_f64(0.92);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_photo() {
        let cli = test_client(StaticDishIdentifier::default());

        let resp = cli
            .post("/dishes/identify")
            .body_json(&json!({ "photoDataUri": "not a data uri" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("name").assert_string("ValidationError");
        body.get("message").assert_string("photo.malformed_data_uri");
    }

    #[tokio::test]
    async fn should_return_bad_gateway_when_capability_answers_nonsense() {
        let cli = test_client(StaticDishIdentifier::new("", 0.5));

        let resp = cli
            .post("/dishes/identify")
            .body_json(&json!({ "photoDataUri": JPEG_DATA_URI }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
    }

    fn jpeg_data_uri_of_len(len: usize) -> String {
        use base64::Engine;
        use base64::engine::general_purpose::STANDARD;

        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        bytes.resize(len, 0x00);
        format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
    }

    #[tokio::test]
    async fn should_report_photo_too_large_when_body_exceeds_size_limit() {
        let lookup = |name: &str| (name == "MAX_PHOTO_BYTES").then(|| "3000".to_string());
        let recognition = RecognitionConfig::from_lookup(&lookup).unwrap();
        let use_case = Arc::new(IdentifyDishUseCaseImpl {
            identifier: Arc::new(StaticDishIdentifier::default()),
            policy: recognition.photo_policy(),
            timeout: Duration::from_secs(5),
            logger: Arc::new(TracingLogger::default()),
        });
        let service = OpenApiService::new(DishApi::new(use_case), "test", "0.0.0");
        let app = Route::new()
            .nest("/", service)
            .with(SizeLimit::new(recognition.max_request_bytes()))
            .catch_error(size_limit_rejection);
        let cli = TestClient::new(app);
        let body = json!({ "photoDataUri": jpeg_data_uri_of_len(20_000) }).to_string();

        let resp = cli
            .post("/dishes/identify")
            .content_type("application/json")
            .header("content-length", body.len())
            .body(body)
            .send()
            .await;

        resp.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let json = resp.json().await;
        let error = json.value().object();
        error.get("name").assert_string("ValidationError");
        error.get("message").assert_string("photo.too_large");
    }
}
