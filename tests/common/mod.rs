//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use dashboard_gateway::config::GatewayConfig;
use dashboard_gateway::{HttpServer, Shutdown};

/// Raw heads (request line + headers) of every request the mock received.
pub type CapturedRequests = Arc<Mutex<Vec<String>>>;

/// Start a mock upstream returning a fixed status and body.
pub async fn start_mock_upstream(
    status: u16,
    body: &'static str,
) -> (SocketAddr, CapturedRequests) {
    start_mock_upstream_with_delay(status, body, Duration::ZERO).await
}

/// Start a mock upstream that waits `delay` before answering.
pub async fn start_mock_upstream_with_delay(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> (SocketAddr, CapturedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured: CapturedRequests = Arc::new(Mutex::new(Vec::new()));
    let captured_for_task = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let captured = captured_for_task.clone();
                    tokio::spawn(async move {
                        // Read the head; GET requests carry no body.
                        let mut buf = vec![0u8; 8192];
                        let mut head = Vec::new();
                        loop {
                            match socket.read(&mut buf).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    head.extend_from_slice(&buf[..n]);
                                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }
                        captured
                            .lock()
                            .await
                            .push(String::from_utf8_lossy(&head).into_owned());

                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }

                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, captured)
}

/// Start a gateway pointed at `upstream_url` on an ephemeral port.
///
/// Returns the gateway base URL and the shutdown handle keeping it alive.
pub async fn start_gateway(upstream_url: String, upstream_secs: u64) -> (String, Shutdown) {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = upstream_url;
    config.timeouts.upstream_secs = upstream_secs;
    config.observability.metrics_enabled = false;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    // Give the server a moment to start accepting.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{}", addr), shutdown)
}
