#![allow(clippy::unwrap_used)]
// Tests for the blocking wrapper. The mock server needs a runtime of its
// own; the blocking client brings its own single-threaded one.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gridcarbon::{Error, IntensityIndex, blocking};

fn start_mock_server(rt: &tokio::runtime::Runtime) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/intensity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "from": "2023-05-15T12:00Z",
                    "to": "2023-05-15T12:30Z",
                    "intensity": { "forecast": 266, "actual": 263, "index": "moderate" }
                }]
            })))
            .mount(&server)
            .await;
        server
    })
}

#[test]
fn blocking_current_intensity() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_server(&rt);

    let client = blocking::Client::with_base_url(&server.uri()).unwrap();
    let data = client.current_intensity().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0].intensity.forecast, 266);
    assert_eq!(data[0].intensity.index, IntensityIndex::Moderate);
}

#[test]
fn blocking_validates_input_without_network() {
    let client = blocking::Client::with_base_url("http://127.0.0.1:9").unwrap();

    let result = client.regional_postcode("   ");

    assert!(
        matches!(result, Err(Error::InvalidArgument(_))),
        "got: {result:?}"
    );
}

#[test]
fn blocking_surfaces_api_errors() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": "400", "message": "invalid date" }
            })))
            .mount(&server)
            .await;
        server
    });

    let client = blocking::Client::with_base_url(&server.uri()).unwrap();
    let err = client.intensity_today().unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.api_error_code(), Some("400"));
}
