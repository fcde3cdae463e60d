//! Data-driven request-construction tests.
//!
//! Each vector in `test-vectors/requests.json` describes a chain of path
//! segments, a verb, payload data and extra headers, plus the exact wire
//! request a capturing transport must observe. Bodies are compared as
//! parsed JSON to avoid false negatives from field-ordering differences.

use std::sync::{Arc, Mutex};

use allegro_core::{
    HttpRequest, HttpResponse, HttpTransport, Method, Params, Resource, StaticCredentials,
    TransportError,
};

const BASE_URL: &str = "https://api.example.com";

/// Records every request and answers 200 with an empty JSON object.
#[derive(Default)]
struct CapturingTransport {
    seen: Mutex<Vec<HttpRequest>>,
}

impl HttpTransport for CapturingTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "{}".to_string(),
        })
    }
}

fn parse_method(s: &str) -> Method {
    match s {
        "GET" => Method::Get,
        "POST" => Method::Post,
        "PUT" => Method::Put,
        "DELETE" => Method::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Walk a vector's path description: strings are plain segments, objects
/// are collection calls carrying an item id.
fn walk(root: Resource, path: &[serde_json::Value]) -> Resource {
    let mut node = root;
    for step in path {
        node = match step {
            serde_json::Value::String(name) => node.child(name),
            serde_json::Value::Object(call) => {
                let name = call["collection"].as_str().unwrap();
                let id = call["id"].as_str();
                node.collection_item(name, id).unwrap()
            }
            other => panic!("unsupported path step: {other}"),
        };
    }
    node
}

fn header_pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let transport = Arc::new(CapturingTransport::default());
        let root = Resource::root(
            BASE_URL,
            Arc::new(StaticCredentials::new("vector-token", "vector-key")),
            transport.clone(),
        );
        let node = walk(root, case["path"].as_array().unwrap());

        let data: Option<Params> = case
            .get("data")
            .filter(|v| !v.is_null())
            .map(|v| v.as_object().unwrap().clone());
        let extra: Vec<(String, String)> = case
            .get("extra_headers")
            .map(header_pairs)
            .unwrap_or_default();
        let extra_refs: Vec<(&str, &str)> = extra
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();

        let method = parse_method(case["method"].as_str().unwrap());
        match method {
            Method::Get => node.get(data.as_ref(), &extra_refs),
            Method::Delete => node.delete(data.as_ref(), &extra_refs),
            Method::Put => node.put(&data.clone().unwrap_or_default(), &extra_refs),
            Method::Post => node.post(&data.clone().unwrap_or_default(), &extra_refs),
        }
        .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "{name}: transport calls");
        let request = &seen[0];

        assert_eq!(request.method, method, "{name}: method");
        assert_eq!(
            request.uri,
            format!("{BASE_URL}{}", case["expected_uri"].as_str().unwrap()),
            "{name}: uri"
        );

        match case.get("expected_body").filter(|v| !v.is_null()) {
            None => assert!(request.body.is_none(), "{name}: body should be absent"),
            Some(expected) => {
                let body: serde_json::Value =
                    serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
        }

        let expected_headers = header_pairs(&case["expected_headers"]);
        assert_eq!(request.headers, expected_headers, "{name}: headers");
    }
}
