mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_root_serves_index_html() {
    let site = common::create_site();
    let server = common::create_test_server(&common::test_config(site.path(), None));

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text(common::INDEX_HTML);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_assets_are_served_with_guessed_content_type() {
    let site = common::create_site();
    let server = common::create_test_server(&common::test_config(site.path(), None));

    let response = server.get("/assets/app.css").await;

    response.assert_status_ok();
    response.assert_text("body{margin:0}");
    assert_eq!(response.header("content-type"), "text/css");
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let site = common::create_site();
    let server = common::create_test_server(&common::test_config(site.path(), None));

    let response = server.get("/nonexistent.file").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Not Found");
}

#[tokio::test]
async fn test_directory_is_not_found() {
    let site = common::create_site();
    let server = common::create_test_server(&common::test_config(site.path(), None));

    let response = server.get("/assets").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Not Found");
}

#[tokio::test]
async fn test_missing_static_dir_is_not_found() {
    let site = common::create_site();
    let missing = site.path().join("does-not-exist");
    let server = common::create_test_server(&common::test_config(&missing, None));

    let response = server.get("/").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Not Found");
}

#[tokio::test]
async fn test_percent_encoded_name_is_served() {
    let site = common::create_site();
    std::fs::write(site.path().join("my file.txt"), "spaced out").unwrap();
    let server = common::create_test_server(&common::test_config(site.path(), None));

    let response = server.get("/my%20file.txt").await;

    response.assert_status_ok();
    response.assert_text("spaced out");
    assert_eq!(response.header("content-type"), "text/plain");
}

#[tokio::test]
async fn test_encoded_traversal_is_not_found() {
    let parent = tempfile::tempdir().unwrap();
    std::fs::write(parent.path().join("secret.txt"), "top secret").unwrap();
    let site = parent.path().join("dist");
    std::fs::create_dir(&site).unwrap();
    std::fs::write(site.join("index.html"), common::INDEX_HTML).unwrap();
    let server = common::create_test_server(&common::test_config(&site, None));

    for path in ["/%2e%2e/secret.txt", "/%2E%2E%2Fsecret.txt", "/assets/..%2F..%2Fsecret.txt"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Not Found");
    }
}
