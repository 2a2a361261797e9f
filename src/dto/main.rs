use serde::Serialize;
use utoipa::ToSchema;

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Identifiers of reports available for download.
    pub reports: Vec<String>,
    pub customers: usize,
    pub orders: usize,
    pub build_environment: String,
}

/// Body of the greeting endpoint.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
pub struct Greeting {
    #[schema(example = "Hello World!")]
    pub message: String,
}

/// Error body returned by the JSON endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Reason {
    #[schema(example = "Report with id 0b7a3c2e-0d7c-4f61-9a0e-3b0d4f6b2c11 not found.")]
    pub reason: String,
}

/// One operation listed on the API documentation page.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub method: &'static str,
    pub path: String,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DocsPageData {
    pub title: String,
    pub version: String,
    pub endpoints: Vec<ApiEndpoint>,
}
