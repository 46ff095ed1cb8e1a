//! Fetch + marker validation tests

use std::time::Duration;

use tempfile::TempDir;

use crate::error::AppError;
use crate::fetch::{check_marker, fetch_homepage};
use crate::port::find_free_port;
use crate::server::{StaticServer, wait_ready};
use crate::test::server::site_with_index;

const TIMEOUT: Duration = Duration::from_secs(5);
const READY: Duration = Duration::from_secs(2);

#[test]
fn fetch_returns_index_body() {
    let dir = site_with_index("<html><body>Welcome to LlamaSim</body></html>");
    let port = find_free_port().unwrap();
    let server = StaticServer::spawn(dir.path().to_path_buf(), port, true).unwrap();
    wait_ready(port, READY).unwrap();

    let body = fetch_homepage(port, TIMEOUT).unwrap();
    assert!(body.contains("LlamaSim"));

    server.stop();
}

#[test]
fn unbound_port_is_a_connection_error() {
    let port = find_free_port().unwrap();
    let err = fetch_homepage(port, TIMEOUT).unwrap_err();
    assert!(matches!(err, AppError::Connection(_)), "got: {err}");
}

#[test]
fn missing_index_without_listing_is_status_404() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port().unwrap();
    let server = StaticServer::spawn(dir.path().to_path_buf(), port, false).unwrap();
    wait_ready(port, READY).unwrap();

    let err = fetch_homepage(port, TIMEOUT).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedStatus(404)), "got: {err}");

    server.stop();
}

#[test]
fn missing_index_with_listing_falls_back_to_a_directory_page() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    let port = find_free_port().unwrap();
    let server = StaticServer::spawn(dir.path().to_path_buf(), port, true).unwrap();
    wait_ready(port, READY).unwrap();

    let body = fetch_homepage(port, TIMEOUT).unwrap();
    assert!(body.contains("notes.txt"), "listing should name the file: {body}");

    server.stop();
}

#[test]
fn check_marker_accepts_exact_substring() {
    check_marker("<h1>LlamaSim habitat</h1>", "LlamaSim").unwrap();
}

#[test]
fn check_marker_is_case_sensitive() {
    let err = check_marker("<h1>llamasim</h1>", "LlamaSim").unwrap_err();
    assert!(matches!(err, AppError::MissingMarker(_)));
}

#[test]
fn check_marker_rejects_empty_body() {
    assert!(check_marker("", "LlamaSim").is_err());
}
