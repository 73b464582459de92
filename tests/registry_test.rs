use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use kiln::registry::{GithubRegistry, TemplateRegistry};

/// Serves a single canned HTTP response and reports the request it saw.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 2048];
            let n = stream.read(&mut buf).unwrap_or(0);
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{addr}/search/repositories"), rx)
}

#[test]
fn test_search_maps_items_to_templates() {
    let (endpoint, requests) = serve_once(
        "200 OK",
        r#"{"items":[
            {"name":"starter-one","stargazers_count":42,"clone_url":"https://github.com/a/starter-one.git"},
            {"name":"starter-two","stargazers_count":7,"clone_url":"https://github.com/b/starter-two.git"}
        ]}"#,
    );

    let registry = GithubRegistry::with_endpoint(endpoint);
    let templates = registry.search();

    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].descriptor.name, "starter-one");
    assert_eq!(templates[0].stars, 42);
    assert_eq!(
        templates[0].descriptor.location,
        "https://github.com/a/starter-one.git"
    );

    let request = requests.recv().unwrap();
    assert!(request.contains("User-Agent: Kiln CLI") || request.contains("user-agent: Kiln CLI"));
}

#[test]
fn test_server_error_degrades_to_empty() {
    let (endpoint, _requests) =
        serve_once("500 Internal Server Error", r#"{"message":"boom"}"#);

    let registry = GithubRegistry::with_endpoint(endpoint);
    assert!(registry.search().is_empty());
}

#[test]
fn test_malformed_body_degrades_to_empty() {
    let (endpoint, _requests) = serve_once("200 OK", "definitely not json");

    let registry = GithubRegistry::with_endpoint(endpoint);
    assert!(registry.search().is_empty());
}

#[test]
fn test_unreachable_endpoint_degrades_to_empty() {
    // Nothing listens on this port.
    let registry = GithubRegistry::with_endpoint("http://127.0.0.1:1/search/repositories");
    assert!(registry.search().is_empty());
}
