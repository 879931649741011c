//! The reqwest transport against a local tiny_http server.

use derivative_editor::settings::SyncSettings;
use derivative_editor::sync::send_patch;
use derivative_editor::transport::{HttpRequest, Method, ReqwestTransport, Transport};
use derivative_editor::types::{Area, CropParams, Operation, PatchBody, Ratio};
use derivative_editor::SyncError;
use std::io::Read;
use std::sync::mpsc;
use std::thread;
use tiny_http::{Header, Response, Server, StatusCode};

/// What the server saw of the single request it answered.
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    content_type: Option<String>,
    user_agent: Option<String>,
    body: String,
}

/// Serve exactly one request with `status`, `body` and optional `Location`.
fn serve_once(
    status: u16,
    body: &'static str,
    location: Option<&'static str>,
) -> (String, mpsc::Receiver<Seen>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok(mut request) = server.recv() else { return };
        let header = |name: &str| {
            request
                .headers()
                .iter()
                .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                .map(|h| h.value.as_str().to_string())
        };
        let content_type = header("Content-Type");
        let user_agent = header("User-Agent");
        let mut received = String::new();
        let _ = request.as_reader().read_to_string(&mut received);
        let seen = Seen {
            method: request.method().as_str().to_string(),
            url: request.url().to_string(),
            content_type,
            user_agent,
            body: received,
        };

        let mut response = Response::from_string(body).with_status_code(StatusCode(status));
        if let Some(location) = location {
            let header = Header::from_bytes(&b"Location"[..], location.as_bytes()).unwrap();
            response = response.with_header(header);
        }
        let _ = request.respond(response);
        let _ = tx.send(seen);
    });

    (format!("http://{addr}"), rx)
}

fn body() -> PatchBody {
    PatchBody {
        operations: vec![Operation::Crop(CropParams::new(
            Area::new(5.0, 5.0, 200.0, 150.0),
            Ratio::Free,
        ))],
    }
}

#[tokio::test]
async fn test_patch_roundtrip_over_http() {
    let (base, seen) = serve_once(
        200,
        r#"{"id": 1, "operations": [["crop", {"left": 6, "top": 5, "width": 200, "height": 150, "ratio": null}]]}"#,
        None,
    );
    let transport = ReqwestTransport::new(&SyncSettings::default()).unwrap();

    let derivative = send_patch(&transport, &format!("{base}/derivatives/1"), &body())
        .await
        .unwrap();
    assert_eq!(
        derivative.operations,
        vec![Operation::Crop(CropParams::new(
            Area::new(6.0, 5.0, 200.0, 150.0),
            Ratio::Free
        ))]
    );

    let seen = seen.recv().unwrap();
    assert_eq!(seen.method, "PATCH");
    assert_eq!(seen.url, "/derivatives/1");
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    assert!(seen.user_agent.unwrap_or_default().starts_with("derivative-editor/"));
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent, serde_json::to_value(body()).unwrap());
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let (base, _seen) = serve_once(500, "<h1>Boom</h1>", None);
    let transport = ReqwestTransport::new(&SyncSettings::default()).unwrap();

    let err = send_patch(&transport, &format!("{base}/derivatives/1"), &body())
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Server { status: 500, .. }));
    assert_eq!(err.document_body(), "<h1>Boom</h1>");
}

#[tokio::test]
async fn test_location_header_is_exposed() {
    let (base, _seen) = serve_once(201, "", Some("/items/9"));
    let transport = ReqwestTransport::new(&SyncSettings::default()).unwrap();

    let response = transport
        .send(HttpRequest::new(Method::Post, format!("{base}/items")).with_json(serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(response.location.as_deref(), Some("/items/9"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let transport = ReqwestTransport::new(&SyncSettings::default()).unwrap();

    let err = send_patch(&transport, &format!("http://{addr}/derivatives/1"), &body())
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Transport(_)));
    assert_eq!(err.document_body(), "");
}
