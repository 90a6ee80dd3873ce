use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:9002,http://localhost:3000")
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
pub fn init_cors(lookup: &impl Fn(&str) -> Option<String>) -> Cors {
    let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|| "http://localhost:9002,http://localhost:3000".to_string());

    let origins: Vec<String> = allowed_origins
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
