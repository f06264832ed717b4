//! OpenFaaS gateway metrics.

use crate::client::PromqClient;
use crate::error::PromqResult;
use promq_core::response::{decode_execution_times, decode_invocation_rates, decode_service_counts};
use promq_core::{FunctionValues, InvocationRates, MetricFamily, ServiceCounts, TimeWindow};

/// Gateway API for per-function metrics.
pub struct GatewayApi<'a> {
    client: &'a PromqClient,
}

impl<'a> GatewayApi<'a> {
    pub(crate) fn new(client: &'a PromqClient) -> Self {
        Self { client }
    }

    /// Average function execution time in seconds over `window`, keyed by
    /// function name.
    pub async fn average_execution_time(
        &self,
        window: impl Into<TimeWindow>,
    ) -> PromqResult<FunctionValues> {
        let family = MetricFamily::AverageExecutionTime(window.into());
        let body = self.client.execute(family).await?;
        Ok(decode_execution_times(&body)?)
    }

    /// Invocations per second over `window`, keyed by function name and then
    /// by HTTP status code.
    pub async fn invocation_rate(
        &self,
        window: impl Into<TimeWindow>,
    ) -> PromqResult<InvocationRates> {
        let family = MetricFamily::InvocationRate(window.into());
        let body = self.client.execute(family).await?;
        Ok(decode_invocation_rates(&body)?)
    }

    /// Number of currently active replicas, keyed by function name.
    pub async fn service_count(&self) -> PromqResult<ServiceCounts> {
        let body = self.client.execute(MetricFamily::ServiceCount).await?;
        Ok(decode_service_counts(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::PromqClient;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PromqClient {
        PromqClient::builder()
            .host(server.address().ip().to_string())
            .port(server.address().port())
            .build()
            .unwrap()
    }

    async fn respond(server: &MockServer, query: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .and(query_param("query", query))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_average_execution_time() {
        let server = MockServer::start().await;
        respond(
            &server,
            "rate(gateway_functions_seconds_sum[5m]) / rate(gateway_functions_seconds_count[5m])",
            r#"{"data":{"result":[{"metric":{"function_name":"f1"},"value":[0,"1.5"]},{"metric":{"function_name":"f2"},"value":[0,"abc"]}]}}"#,
        )
        .await;

        let result = client_for(&server)
            .gateway()
            .average_execution_time(Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result["f1"], 1.5);
        assert!(result["f2"].is_nan());
        assert!(!result.contains_key("f3"));
    }

    #[tokio::test]
    async fn test_invocation_rate() {
        let server = MockServer::start().await;
        respond(
            &server,
            "rate(gateway_function_invocation_total[1m])",
            r#"{"status":"success","data":{"resultType":"vector","result":[
                {"metric":{"function_name":"f1","code":"200"},"value":[1712345678.1,"3.0"]},
                {"metric":{"function_name":"f1","code":"502"},"value":[1712345678.1,"0.25"]}
            ]}}"#,
        )
        .await;

        let result = client_for(&server)
            .gateway()
            .invocation_rate(Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(result["f1"]["200"], 3.0);
        assert_eq!(result["f1"]["502"], 0.25);
    }

    #[tokio::test]
    async fn test_service_count() {
        let server = MockServer::start().await;
        respond(
            &server,
            "gateway_service_count",
            r#"{"data":{"result":[
                {"metric":{"function_name":"f1"},"value":[0,"2"]},
                {"metric":{"function_name":"f2"},"value":[0,"?"]}
            ]}}"#,
        )
        .await;

        let result = client_for(&server).gateway().service_count().await.unwrap();

        assert_eq!(result["f1"], 2);
        assert_eq!(result["f2"], 0);
    }

    #[tokio::test]
    async fn test_empty_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let window = Duration::from_secs(300);

        assert!(client.gateway().average_execution_time(window).await.unwrap_err().is_decode());
        assert!(client.gateway().invocation_rate(window).await.unwrap_err().is_decode());
        assert!(client.gateway().service_count().await.unwrap_err().is_decode());
    }

    #[tokio::test]
    async fn test_server_error_page_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .gateway()
            .service_count()
            .await
            .unwrap_err();

        assert!(err.is_decode());
    }
}
