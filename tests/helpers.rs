// Shared test helpers for the mock Trends server.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use httptest::{matchers::*, responders::*, Expectation, Server};

use gtrends::{Config, TrendsClient};

/// Reads a captured response body from `tests/fixtures`.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

/// Creates a client whose API and cookie page both point at `server`.
pub fn client_for(server: &Server) -> TrendsClient {
    TrendsClient::new(Config::with_base_url(&format!("http://{}", server.addr())))
        .expect("Failed to build client")
}

/// Serves a session cookie on the cookie page, any number of times.
pub fn expect_cookie_page(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(..)
            .respond_with(status_code(200).append_header("Set-Cookie", "NID=integration; path=/")),
    );
}

/// Serves `fixture` for `path` (relative to the API base), any number of times.
pub fn serve_fixture(server: &Server, path: &str, fixture_name: &str) {
    server.expect(
        Expectation::matching(request::method_path("GET", eq(format!("/trends/api{path}"))))
            .times(..)
            .respond_with(status_code(200).body(fixture(fixture_name))),
    );
}
