use std::sync::{Arc, Mutex};

use quickopen::{
    DownloadError,
    download::{Downloader, Fetch, TEMP_NAME_LEN},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Serve one canned HTTP response per connection and return the base URL.
async fn serve(response: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{addr}")
}

fn ok_response(body: &[u8], content_type: &str) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
        body.len(),
        content_type
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

fn downloader(dir: &std::path::Path) -> Downloader {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Downloader::with_client(client, dir)
}

#[tokio::test(flavor = "multi_thread")]
async fn downloads_to_a_fresh_temp_file() {
    let body = b"line one\nline two\n".repeat(100);
    let base = serve(ok_response(&body, "text/plain")).await;
    let dir = tempfile::tempdir().unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut observer = move |read: u64, total: Option<u64>| sink.lock().unwrap().push((read, total));

    let path = downloader(dir.path())
        .fetch(&format!("{base}/files/a.txt?rev=2"), &mut observer)
        .await
        .unwrap();

    assert_eq!(path.parent().unwrap(), dir.path());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(".txt"));
    assert_eq!(name.len(), TEMP_NAME_LEN + ".txt".len());
    assert_eq!(std::fs::read(&path).unwrap(), body);

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert_eq!(seen.last(), Some(&(body.len() as u64, Some(body.len() as u64))));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_extension_is_guessed_from_content_type() {
    let base = serve(ok_response(b"\x89PNG\r\n", "image/png")).await;
    let dir = tempfile::tempdir().unwrap();

    let path = downloader(dir.path())
        .fetch(&format!("{base}/avatar"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap();

    assert_eq!(path.extension().unwrap(), "png");
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_a_download_error() {
    let response = b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec();
    let base = serve(response).await;
    let dir = tempfile::tempdir().unwrap();

    let err = downloader(dir.path())
        .fetch(&format!("{base}/missing.txt"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap_err();

    match err {
        DownloadError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_host_is_a_request_error() {
    // bind then drop to get a port nothing listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = tempfile::tempdir().unwrap();

    let err = downloader(dir.path())
        .fetch(&format!("http://127.0.0.1:{port}/a.txt"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Request { .. }));
    assert!(err.to_string().contains("a.txt"));
}

#[tokio::test(flavor = "multi_thread")]
async fn plain_text_without_extension_is_saved_as_txt() {
    let base = serve(ok_response(b"read me\n", "text/plain; charset=utf-8")).await;
    let dir = tempfile::tempdir().unwrap();

    let path = downloader(dir.path())
        .fetch(&format!("{base}/readme"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap();

    assert_eq!(path.extension().unwrap(), "txt");
    assert_eq!(std::fs::read(&path).unwrap(), b"read me\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn binary_without_extension_gets_no_extension() {
    let base = serve(ok_response(b"\x00\x01", "application/octet-stream")).await;
    let dir = tempfile::tempdir().unwrap();

    let path = downloader(dir.path())
        .fetch(&format!("{base}/blob"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap();

    assert_eq!(path.extension(), None);
    assert_eq!(path.file_name().unwrap().len(), TEMP_NAME_LEN);
}

#[tokio::test(flavor = "multi_thread")]
async fn truncated_body_leaves_no_file() {
    let mut response =
        b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n"
            .to_vec();
    response.extend_from_slice(b"short");
    let base = serve(response).await;
    let dir = tempfile::tempdir().unwrap();

    let err = downloader(dir.path())
        .fetch(&format!("{base}/a.txt"), &mut |_: u64, _: Option<u64>| {})
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Request { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn chunked_response_reports_unknown_total() {
    let response = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n".to_vec();
    let base = serve(response).await;
    let dir = tempfile::tempdir().unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut observer = move |read: u64, total: Option<u64>| sink.lock().unwrap().push((read, total));

    let path = downloader(dir.path())
        .fetch(&format!("{base}/b.txt"), &mut observer)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|(_, total)| total.is_none()));
    assert_eq!(seen.last().map(|(read, _)| *read), Some(11));
}
