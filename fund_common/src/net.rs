//! Data provider constants shared by the library and the generator binary.

/// Default base URL of the IEX Cloud REST API.
pub const IEX_BASE_URL: &str = "https://cloud.iexapis.com/stable";
/// Maximum number of symbols IEX Cloud accepts in one batch request.
pub const IEX_BATCH_LIMIT: usize = 100;
/// Data types requested from the batch endpoint.
pub const IEX_BATCH_TYPES: &str = "quote";

/// Helper to build the batch endpoint URL from a base URL like "https://host/stable".
pub fn batch_endpoint(base_url: &str) -> String {
    format!("{}/stock/market/batch", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_endpoint_ignores_trailing_slash() {
        assert_eq!(
            batch_endpoint("https://sandbox.iexapis.com/stable/"),
            "https://sandbox.iexapis.com/stable/stock/market/batch"
        );
        assert_eq!(
            batch_endpoint(IEX_BASE_URL),
            "https://cloud.iexapis.com/stable/stock/market/batch"
        );
    }
}
