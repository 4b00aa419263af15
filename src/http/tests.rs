use super::*;
use crate::error::HttpError;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

fn spawn_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(chunk.get(..read)?);
        let text = String::from_utf8_lossy(&data).into_owned();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| {
                    line.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .and_then(|value| value.trim().parse::<usize>().ok())
                })
                .unwrap_or(0);
            if data.len() >= header_end.saturating_add(4).saturating_add(content_length) {
                return Some(text);
            }
        }
    }
    Some(String::from_utf8_lossy(&data).into_owned())
}

fn handle_client(mut stream: TcpStream) {
    drop(stream.set_nonblocking(false));
    let Some(head) = read_request(&mut stream) else {
        return;
    };
    let response: &[u8] = if head.starts_with("GET /__down?bytes=4 ") {
        b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\nConnection: close\r\n\r\n0000"
    } else if head.starts_with("GET /missing ") {
        b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    } else if head.starts_with("POST /__up ") {
        b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    } else {
        b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK"
    };
    if stream.write_all(response).is_err() {
        return;
    }
    drop(stream.flush());
    drop(stream.shutdown(Shutdown::Both));
}

#[test]
fn download_request_encodes_size_in_query() -> Result<(), HttpError> {
    let request = FetchRequest::download(101_000);
    if request.method != Method::Get || request.path != "/__down?bytes=101000" {
        return Err(HttpError::from(format!("Unexpected request: {:?}", request)));
    }
    Ok(())
}

#[test]
fn upload_request_carries_zero_payload() -> Result<(), HttpError> {
    let request = FetchRequest::upload(11);
    let body = request.body.ok_or(HttpError::from("Expected upload body"))?;
    if request.method != Method::Post || body.len() != 11 || body.iter().any(|b| *b != b'0') {
        return Err(HttpError::from("Unexpected upload payload"));
    }
    Ok(())
}

#[test]
fn rejects_non_http_endpoints() -> Result<(), String> {
    match HttpTransport::new("ftp://example.com", TransportOptions::default()) {
        Err(crate::error::AppError::Http(HttpError::UnsupportedScheme { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected scheme rejection".to_owned()),
    }
}

#[tokio::test]
async fn fetch_returns_body_and_maps_status_errors() -> Result<(), String> {
    let (url, _server) = spawn_server()?;
    let transport = HttpTransport::new(&url, TransportOptions::default())
        .map_err(|err| format!("transport build failed: {}", err))?;

    let body = transport
        .fetch(&FetchRequest::download(4))
        .await
        .map_err(|err| format!("download failed: {}", err))?;
    if body.as_ref() != b"0000" {
        return Err(format!("Unexpected body: {:?}", body));
    }

    match transport.fetch(&FetchRequest::get("/missing")).await {
        Err(HttpError::UnexpectedStatus { status: 404, .. }) => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(_) => return Err("Expected 404 to fail".to_owned()),
    }

    let upload = transport
        .fetch(&FetchRequest::upload(16))
        .await
        .map_err(|err| format!("upload failed: {}", err))?;
    if !upload.is_empty() {
        return Err("Expected empty upload acknowledgement".to_owned());
    }
    Ok(())
}
