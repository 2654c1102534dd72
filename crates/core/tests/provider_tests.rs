// ═══════════════════════════════════════════════════════════════════
// Provider Tests — FredConfig, FredProvider request construction
// ═══════════════════════════════════════════════════════════════════

use fred_charts_core::errors::CoreError;
use fred_charts_core::models::chart::TimeFrequency;
use fred_charts_core::providers::fred::{FredConfig, FredProvider};
use fred_charts_core::providers::traits::SeriesProvider;

fn provider() -> FredProvider {
    FredProvider::new(FredConfig::new("testkey").with_base_url("http://localhost:9000/fred"))
        .unwrap()
}

/// Decoded (key, value) pairs of a request's query string.
fn query_pairs(request: &reqwest::Request) -> Vec<(String, String)> {
    request
        .url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════
//  FredConfig
// ═══════════════════════════════════════════════════════════════════

mod config {
    use super::*;

    #[test]
    fn new_uses_the_public_fred_base_url() {
        let config = FredConfig::new("testkey");
        assert_eq!(config.base_url, "https://api.stlouisfed.org/fred");
        assert_eq!(config.api_key, "testkey");
    }

    #[test]
    fn with_base_url_overrides_the_default() {
        let config = FredConfig::new("testkey").with_base_url("http://localhost:9000/fred");
        assert_eq!(config.base_url, "http://localhost:9000/fred");
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = FredProvider::new(FredConfig::new("")).unwrap_err();
        assert!(matches!(err, CoreError::MissingApiKey));
    }

    #[test]
    fn provider_reports_its_name() {
        assert_eq!(provider().name(), "FRED");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Request construction
// ═══════════════════════════════════════════════════════════════════

mod requests {
    use super::*;

    #[test]
    fn search_request_hits_the_search_endpoint_with_get() {
        let request = provider().search_request("gross domestic").unwrap();
        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/fred/series/search");
    }

    #[test]
    fn search_request_carries_query_key_and_file_type() {
        let request = provider().search_request("gross domestic").unwrap();
        assert_eq!(
            query_pairs(&request),
            vec![
                ("search_text".to_string(), "gross domestic".to_string()),
                ("api_key".to_string(), "testkey".to_string()),
                ("file_type".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn search_text_is_percent_encoded_on_the_wire() {
        let request = provider().search_request("gdp & real rates?").unwrap();

        let raw_query = request.url().query().unwrap();
        assert!(!raw_query.contains(' '));
        assert!(!raw_query.contains('?'));
        // '&' in the text must not split the parameter
        assert_eq!(query_pairs(&request)[0].1, "gdp & real rates?");
    }

    #[test]
    fn observations_request_hits_the_observations_endpoint() {
        let request = provider()
            .observations_request("GDP", TimeFrequency::Quarterly)
            .unwrap();
        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/fred/series/observations");
    }

    #[test]
    fn observations_request_carries_series_and_frequency() {
        let request = provider()
            .observations_request("GDP", TimeFrequency::SemiAnnual)
            .unwrap();
        assert_eq!(
            query_pairs(&request),
            vec![
                ("series_id".to_string(), "GDP".to_string()),
                ("frequency".to_string(), "sa".to_string()),
                ("api_key".to_string(), "testkey".to_string()),
                ("file_type".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn each_frequency_maps_to_its_wire_code() {
        for (frequency, code) in [
            (TimeFrequency::Quarterly, "q"),
            (TimeFrequency::SemiAnnual, "sa"),
            (TimeFrequency::Annual, "a"),
        ] {
            let request = provider().observations_request("GDP", frequency).unwrap();
            let pairs = query_pairs(&request);
            assert!(pairs.contains(&("frequency".to_string(), code.to_string())));
        }
    }
}
