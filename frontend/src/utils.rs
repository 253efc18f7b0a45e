/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let location = gloo::utils::window().location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/v1/graphql" -> "http://localhost:3000/v1/graphql").
/// Absolute URLs are passed through untouched.
pub fn api_url(path: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{}{}", get_base_url(), path)
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Value of the `Authorization` header for a stored access token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
