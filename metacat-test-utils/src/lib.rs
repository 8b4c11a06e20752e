//! Metacat Test Utilities
//!
//! Centralized test infrastructure for the Metacat workspace:
//! - `ScriptedTransport`, an in-memory transport that records requests
//! - Test fixtures for common entities
//! - Proptest generators for test cases and tables

pub use metacat_core::{
    ApiRequest, Bot, Column, EntityLink, EntityReference, Method, Table, TableProfile,
    TableQuery, TableType, TestCase, TestCaseResult, TestCaseStatus, Transport, TransportError,
    TransportResult, User,
};

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

// ============================================================================
// SCRIPTED TRANSPORT
// ============================================================================

#[derive(Debug, Clone)]
enum ScriptedResponse {
    Body(Value),
    Error(TransportError),
}

#[derive(Debug, Default)]
struct ScriptState {
    requests: Vec<ApiRequest>,
    responses: VecDeque<ScriptedResponse>,
    echo: bool,
}

/// Transport double that records every request and replays queued responses
/// in FIFO order.
///
/// With no response queued, an echoing transport answers with the request
/// body (`{"url": path}` for body-less requests); a non-echoing one answers
/// with a 404 status error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        let transport = Self::default();
        transport.lock().echo = true;
        transport
    }

    pub fn push_response(&self, body: Value) -> &Self {
        self.lock().responses.push_back(ScriptedResponse::Body(body));
        self
    }

    pub fn push_error(&self, error: TransportError) -> &Self {
        self.lock().responses.push_back(ScriptedResponse::Error(error));
        self
    }

    /// Queue a 404 for `path`.
    pub fn push_not_found(&self, path: &str) -> &Self {
        self.push_error(TransportError::Status {
            path: path.to_string(),
            status: 404,
            message: format!("{} not found", path),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.lock().requests.iter().map(|r| r.path.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, request: ApiRequest) -> TransportResult<Value> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        match state.responses.pop_front() {
            Some(ScriptedResponse::Body(body)) => Ok(body),
            Some(ScriptedResponse::Error(error)) => Err(error),
            None if state.echo => Ok(request
                .body
                .unwrap_or_else(|| json!({ "url": request.path }))),
            None => Err(TransportError::Status {
                path: request.path.clone(),
                status: 404,
                message: format!("no scripted response for {} {}", request.method, request.path),
            }),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> TransportResult<Value> {
        self.respond(request)
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn column(name: &str) -> Column {
    Column {
        name: name.to_string(),
        data_type: Some("VARCHAR".to_string()),
        data_type_display: None,
        description: None,
        fully_qualified_name: None,
    }
}

/// Table named after the last FQN segment with `column_count` columns.
pub fn sample_table(fqn: &str, column_count: usize) -> Table {
    let name = fqn.rsplit('.').next().unwrap_or(fqn).to_string();
    Table {
        id: Uuid::new_v4(),
        name,
        fully_qualified_name: Some(fqn.to_string()),
        display_name: None,
        description: None,
        table_type: None,
        columns: (0..column_count).map(|i| column(&format!("col_{}", i))).collect(),
        profile: None,
        table_queries: None,
    }
}

pub fn sample_profile(row_count: u64, column_count: u64, sample: Option<f64>) -> TableProfile {
    TableProfile {
        timestamp: Some(1_700_000_000_000),
        row_count: Some(row_count),
        column_count: Some(column_count),
        profile_sample: sample,
        profile_sample_type: None,
    }
}

pub fn sample_query(sql: &str) -> TableQuery {
    TableQuery {
        query: sql.to_string(),
        query_date: None,
        checksum: None,
        duration: None,
    }
}

/// Test case bound to `fqn`, optionally with a latest result.
pub fn sample_test_case(fqn: &str, status: Option<TestCaseStatus>) -> TestCase {
    TestCase {
        id: Uuid::new_v4(),
        name: format!("{}_check", fqn.replace('.', "_")),
        fully_qualified_name: None,
        entity_link: EntityLink::table(fqn),
        entity_fqn: Some(fqn.to_string()),
        test_case_result: status.map(|status| TestCaseResult {
            timestamp: Some(1_700_000_000_000),
            test_case_status: Some(status),
            result: None,
        }),
    }
}

pub fn sample_user(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        fully_qualified_name: Some(name.to_string()),
        display_name: None,
        description: None,
        email: format!("{}@metacat.dev", name),
        is_bot: Some(true),
        authentication_mechanism: None,
        version: Some(0.1),
    }
}

/// Bot whose `botUser` points at `user`.
pub fn sample_bot(name: &str, user: &User) -> Bot {
    Bot {
        id: Uuid::new_v4(),
        name: name.to_string(),
        fully_qualified_name: Some(name.to_string()),
        display_name: Some(name.to_string()),
        description: Some("service account".to_string()),
        bot_user: EntityReference {
            id: user.id,
            entity_type: "user".to_string(),
            name: Some(user.name.clone()),
            fully_qualified_name: user.fully_qualified_name.clone(),
            display_name: None,
        },
        version: Some(0.1),
    }
}

/// JSON form of any fixture, for queuing as a scripted response.
pub fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

// ============================================================================
// GENERATORS
// ============================================================================

pub mod generators {
    use super::*;
    use proptest::prelude::*;

    pub fn arb_test_case_status() -> impl Strategy<Value = TestCaseStatus> {
        prop_oneof![
            Just(TestCaseStatus::Success),
            Just(TestCaseStatus::Failed),
            Just(TestCaseStatus::Aborted),
            Just(TestCaseStatus::Queued),
            "[A-Z][a-z]{2,8}".prop_map(TestCaseStatus::from),
        ]
    }

    pub fn arb_fqn() -> impl Strategy<Value = String> {
        "[a-z]{1,6}\\.[a-z]{1,6}\\.[a-z_]{1,10}"
    }

    /// Test case for one of `fqns`, with or without a result.
    pub fn arb_test_case(fqns: Vec<String>) -> impl Strategy<Value = TestCase> {
        (
            proptest::sample::select(fqns),
            proptest::option::of(arb_test_case_status()),
        )
            .prop_map(|(fqn, status)| sample_test_case(&fqn, status))
    }

    pub fn arb_table() -> impl Strategy<Value = Table> {
        (arb_fqn(), 0usize..20).prop_map(|(fqn, columns)| sample_table(&fqn, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_transport_replays_in_order() {
        let transport = ScriptedTransport::new();
        transport.push_response(json!({ "n": 1 }));
        transport.push_response(json!({ "n": 2 }));

        let first = transport.send(ApiRequest::get("/a")).await;
        let second = transport.send(ApiRequest::get("/b")).await;

        assert_eq!(first, Ok(json!({ "n": 1 })));
        assert_eq!(second, Ok(json!({ "n": 2 })));
        assert_eq!(transport.paths(), vec!["/a".to_string(), "/b".to_string()]);
    }

    #[tokio::test]
    async fn test_echoing_transport_returns_body() {
        let transport = ScriptedTransport::echoing();
        let body = json!({ "name": "PII" });
        let echoed = transport
            .send(ApiRequest::post("/classifications", body.clone()))
            .await;
        assert_eq!(echoed, Ok(body));
    }

    #[tokio::test]
    async fn test_unscripted_request_is_not_found() {
        let transport = ScriptedTransport::new();
        let err = transport.send(ApiRequest::get("/tags")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(transport.request_count(), 1);
    }
}
