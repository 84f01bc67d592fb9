use docmarks::test_utils;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const SECTIONS: &[&str] = &["docs/setup", "docs/concepts"];

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Serve a table of contents for each section.
pub async fn mount_sections(mock_server: &MockServer, sections: &[&str]) {
    for section in sections {
        let title = section.trim_start_matches("docs/");
        Mock::given(method("GET"))
            .and(path(format!("/{section}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(test_utils::section_page(title, section)),
            )
            .expect(1)
            .mount(mock_server)
            .await;
    }
}

/// Respond with an empty body and the given status for the section.
pub async fn mount_status(mock_server: &MockServer, section: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{section}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}
