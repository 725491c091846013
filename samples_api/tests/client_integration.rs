use futures::{StreamExt, TryStreamExt};
use samples_api::types::{PaginatedResponse, SamplingLocation};
use samples_api::{
    ApiRequest, Client, Error, ObservationQuery, Query, QueryCommon, SamplingLocationQuery,
};
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount_page(server: &MockServer, cursor: Option<&str>, fixture: &str, expected: u64) {
    let mock = Mock::given(method("GET")).and(path("/api/v1/samplinglocations"));
    let mock = match cursor {
        Some(cursor) => mock.and(query_param("cursor", cursor)),
        None => mock.and(query_param_is_missing("cursor")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_string(load_fixture(fixture)))
        .expect(expected)
        .mount(server)
        .await;
}

/// Location search that borrows its search term instead of owning it.
#[derive(Clone)]
struct BorrowedSearch<'a> {
    common: QueryCommon,
    search: &'a str,
}

impl ApiRequest for BorrowedSearch<'_> {
    const PATH: &'static str = "/v1/samplinglocations";
    type Response = PaginatedResponse<SamplingLocation>;

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut().append_pair("search", self.search);
        url
    }
}

impl Query for BorrowedSearch<'_> {
    fn common(&self) -> &QueryCommon {
        &self.common
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

fn client_for(server: &MockServer) -> Client {
    Client::new(&format!("{}/api", server.uri())).unwrap()
}

#[tokio::test]
async fn get_status_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("status.json")))
        .mount(&mock_server)
        .await;

    let status = client_for(&mock_server).get_status().await.unwrap();
    assert_eq!(status.release_name, "2024.3");
}

#[tokio::test]
async fn get_single_page_success() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, None, "locations_page1.json", 1).await;

    let resp = client_for(&mock_server)
        .get_sampling_locations(&SamplingLocationQuery::default())
        .await
        .unwrap();
    assert_eq!(resp.domain_objects.len(), 2);
    assert_eq!(resp.cursor.as_deref(), Some("bG9jLTI="));
}

#[tokio::test]
async fn get_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/observations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .get_observations(&ObservationQuery::default())
        .await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn get_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).get_status().await;
    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[tokio::test]
async fn lazy_get_follows_cursor() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, None, "locations_page1.json", 1).await;
    mount_page(&mock_server, Some("bG9jLTI="), "locations_page2.json", 1).await;

    let client = client_for(&mock_server);
    let locations: Vec<SamplingLocation> = client
        .lazy_get(SamplingLocationQuery::default())
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = locations.iter().map(|l| l.custom_id.as_str()).collect();
    assert_eq!(ids, vec!["LAKE-01", "WELL-07", "RIVER-12"]);
}

#[tokio::test]
async fn lazy_get_keeps_filters_on_every_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/samplinglocations"))
        .and(query_param_is_missing("cursor"))
        .and(query_param("search", "lake"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("locations_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/samplinglocations"))
        .and(query_param("cursor", "bG9jLTI="))
        .and(query_param("search", "lake"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("locations_page2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = SamplingLocationQuery::default()
        .with_search("lake")
        .with_limit(2);
    let count = client
        .lazy_get(query)
        .try_fold(0usize, |n, _| async move { Ok(n + 1) })
        .await
        .unwrap();

    assert_eq!(count, 3);
}

#[tokio::test]
async fn lazy_get_second_page_fails() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, None, "locations_page1.json", 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/samplinglocations"))
        .and(query_param("cursor", "bG9jLTI="))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let results: Vec<Result<SamplingLocation, Error>> = client
        .lazy_get(SamplingLocationQuery::default())
        .collect()
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(
        results[2],
        Err(Error::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn lazy_get_stopped_early_sends_no_more_requests() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, None, "locations_page1.json", 1).await;
    mount_page(&mock_server, Some("bG9jLTI="), "locations_page2.json", 0).await;

    let client = client_for(&mock_server);
    let first_two: Vec<SamplingLocation> = client
        .lazy_get(SamplingLocationQuery::default())
        .take(2)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(first_two.len(), 2);
}

#[tokio::test]
async fn lazy_get_empty_listing() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, None, "empty.json", 1).await;

    let client = client_for(&mock_server);
    let locations: Vec<SamplingLocation> = client
        .lazy_get(SamplingLocationQuery::default())
        .try_collect()
        .await
        .unwrap();

    assert!(locations.is_empty());
}

#[tokio::test]
async fn lazy_get_accepts_borrowed_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/samplinglocations"))
        .and(query_param("search", "river"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("locations_page2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let search = String::from("river");
    let client = client_for(&mock_server);
    let locations: Vec<SamplingLocation> = client
        .lazy_get(BorrowedSearch {
            common: QueryCommon::default(),
            search: &search,
        })
        .try_collect()
        .await
        .unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].custom_id, "RIVER-12");
}
