//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use serde_json::Value;
use todo_core::{
    ApiError, Cleared, CreateTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient,
    UpdateTodo,
};

const BASE_URL: &str = "http://localhost:3001";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn vectors(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Compare a built request against `expected_request`.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Check an error against the vector's `expected_error` tag.
fn assert_error(name: &str, err: ApiError, expected: &str) {
    let matched = match expected {
        "not_found" => matches!(err, ApiError::NotFound),
        "bad_request" => matches!(err, ApiError::BadRequest(_)),
        "http_error" => matches!(err, ApiError::HttpError { .. }),
        other => panic!("{name}: unknown expected_error {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/create.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let todo = c.parse_create_todo(simulated(case)).unwrap();
        let expected: Todo = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(todo, expected, "{name}: parsed result");
    }

    for case in vectors["rejected"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let err = c.build_create_todo(&input).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "{name}: expected validation error");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/list.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        assert_request(name, &req, &case["expected_request"]);

        let todos = c.parse_list_todos(simulated(case)).unwrap();
        let expected: Vec<Todo> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(todos, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/get.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_get_todo(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_todo(simulated(case));
        match case.get("expected_error") {
            Some(tag) => assert_error(name, result.unwrap_err(), tag.as_str().unwrap()),
            None => {
                let expected: Todo =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/update.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_todo(id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_todo(simulated(case));
        match case.get("expected_error") {
            Some(tag) => assert_error(name, result.unwrap_err(), tag.as_str().unwrap()),
            None => {
                let expected: Todo =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/delete.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_delete_todo(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_todo(simulated(case));
        match case.get("expected_error") {
            Some(tag) => assert_error(name, result.unwrap_err(), tag.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}

// ---------------------------------------------------------------------------
// Clear completed
// ---------------------------------------------------------------------------

#[test]
fn clear_completed_test_vectors() {
    let vectors = vectors(include_str!("../../test-vectors/clear_completed.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_clear_completed();
        assert_request(name, &req, &case["expected_request"]);

        let cleared = c.parse_clear_completed(simulated(case)).unwrap();
        let expected: Cleared = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(cleared, expected, "{name}: parsed result");
    }
}
