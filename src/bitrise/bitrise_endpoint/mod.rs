use reqwest::Method;

pub mod build_log;
pub mod builds;

/// One Bitrise api call, relative to `{domain}/{version}/`.
pub trait Endpoint {
    /// HTTP method used.
    fn method(&self) -> Method {
        Method::GET
    }

    /// API path, without query string.
    fn endpoint(&self) -> String;

    /// Query parameters, sent url-encoded.
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// What is requested, for error messages.
    fn target(&self) -> &'static str;

    /// Identifiers of the request, for error messages.
    fn context(&self) -> String;
}
