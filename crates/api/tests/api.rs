//! HTTP-level integration tests for the project and job endpoints.
//!
//! Each test gets a scratch MySQL database provisioned from `db/migrations`.
//! Run with `DATABASE_URL=mysql://... cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::MySqlPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn exec(pool: &MySqlPool, sql: &str) -> u64 {
    sqlx::query(sql)
        .execute(pool)
        .await
        .unwrap_or_else(|e| panic!("{sql} failed: {e}"))
        .last_insert_id()
}

// ---------------------------------------------------------------------------
// Empty tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn list_endpoints_return_empty_arrays(pool: MySqlPool) {
    for uri in ["/api/projects", "/api/jobs"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, serde_json::json!([]), "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn get_job_returns_job_with_tags(pool: MySqlPool) {
    exec(&pool, "INSERT INTO tags (tag_id, slug, name, postfix) VALUES (1, 'go', 'Go', '')").await;
    exec(
        &pool,
        "INSERT INTO jobs (job_id, company_name, title, description, logo_filename)
         VALUES (7, 'Acme', 'Engineer', 'Builds things', 'acme.png')",
    )
    .await;
    exec(&pool, "INSERT INTO job_tags (job_id, tag_id) VALUES (7, 1)").await;

    let response = get(common::build_test_app(pool), "/api/jobs/7").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "companyName": "Acme",
            "title": "Engineer",
            "description": "Builds things",
            "logoFilename": "acme.png",
            "tags": [{ "slug": "go", "name": "Go", "postfix": "" }],
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn get_missing_job_returns_404(pool: MySqlPool) {
    let response = get(common::build_test_app(pool), "/api/jobs/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "job not found" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn untagged_job_has_empty_tag_list(pool: MySqlPool) {
    let id = exec(
        &pool,
        "INSERT INTO jobs (company_name, title, description, logo_filename)
         VALUES ('Globex', 'Analyst', 'Reads numbers', 'globex.png')",
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), &format!("/api/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["tags"], serde_json::json!([]));

    let response = get(common::build_test_app(pool), "/api/jobs").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["companyName"], "Globex");
    assert_eq!(json[0]["tags"], serde_json::json!([]));
    assert!(json[0].get("jobId").is_none());
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn list_projects_returns_links_and_tags(pool: MySqlPool) {
    exec(&pool, "INSERT INTO tags (tag_id, slug, name, postfix) VALUES (1, 'rust', 'Rust', '')").await;
    exec(
        &pool,
        "INSERT INTO projects (project_id, name, description, project_link1, project_link1_title,
                               project_link2, project_link2_title, hosted_link, hosted_title)
         VALUES (1, 'devsite', 'This site', 'https://github.com/example/devsite', 'Source',
                 'https://example.com/docs', 'Docs', 'https://example.com', 'Live')",
    )
    .await;
    exec(&pool, "INSERT INTO project_tags (project_id, tag_id) VALUES (1, 1)").await;

    let response = get(common::build_test_app(pool), "/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{
            "name": "devsite",
            "description": "This site",
            "projectLinks": [
                { "title": "Source", "link": "https://github.com/example/devsite" },
                { "title": "Docs", "link": "https://example.com/docs" },
                { "title": "Live", "link": "https://example.com" },
            ],
            "tags": [{ "slug": "rust", "name": "Rust", "postfix": "" }],
        }])
    );
}

// ---------------------------------------------------------------------------
// Database status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a MySQL server via DATABASE_URL"]
async fn db_status_reports_connected(pool: MySqlPool) {
    let response = get(common::build_test_app(pool), "/api/db-status").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["connected"], true);
    assert!(json["version"].is_string());
    assert!(json["tableCount"].as_i64().unwrap() >= 5);
    assert_eq!(json["host"], "mysql");
    assert_eq!(json["port"], 3306);
    assert!(json.get("error").is_none());
}
