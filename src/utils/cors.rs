use actix_cors::Cors;

/// Any origin, method and header, with credentials.
///
/// The request origin is echoed back instead of `*`, since browsers refuse a
/// wildcard origin on credentialed requests.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(600)
}
