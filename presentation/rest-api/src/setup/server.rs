use poem::{
    EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{SizeLimit, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::error::size_limit_rejection;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.dish_api, container.recipe_api),
            "Recipe Snap API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(SizeLimit::new(config.recognition.max_request_bytes()))
            .catch_error(size_limit_rejection)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(%addr, "Server running");
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
