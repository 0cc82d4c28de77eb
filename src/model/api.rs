use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Generic error body returned for non-validation failures.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Zero-indexed pagination query shared by list endpoints.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 0.
    #[serde(default)]
    pub page: u64,
    /// Entries per page (default: 10).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: default_per_page(),
        }
    }
}

fn default_per_page() -> u64 {
    10
}
