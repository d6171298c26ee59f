use std::fs;

use agent_checklist::api::create_router;
use agent_checklist::config::AppConfig;
use agent_checklist::models::*;
use agent_checklist::store::SelectionStore;
use axum::http::StatusCode;
use axum_test::TestServer;
use tempfile::TempDir;

fn setup() -> (TestServer, TempDir) {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SelectionStore::new(AppConfig::under(root.path()));
    let server = TestServer::new(create_router(store)).expect("Failed to create test server");
    (server, root)
}

fn write_snapshot(root: &TempDir, json: &str) {
    let dir = root.path().join("json");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("selected_agents.json"), json).unwrap();
}

fn read_snapshot(root: &TempDir) -> PersistedSnapshot {
    let content = fs::read_to_string(root.path().join("json/selected_agents.json"))
        .expect("Snapshot should exist");
    serde_json::from_str(&content).expect("Snapshot should parse")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let (server, _root) = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod form_page {
    use super::*;

    #[tokio::test]
    async fn renders_all_categories_unchecked_without_snapshot() {
        let (server, _root) = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h2>Select Your Tasks</h2>"));
        assert!(html.contains("<h4>Main Tasks</h4>"));
        assert!(html.contains("<h4>Deployment Tasks</h4>"));
        assert!(html.contains("<h4>Additional Tasks</h4>"));
        assert_eq!(html.matches("type=\"checkbox\"").count(), 13);
        assert!(!html.contains(" checked>"));
        assert!(!html.contains("class=\"success\""));
    }

    #[tokio::test]
    async fn checks_items_from_the_saved_snapshot() {
        let (server, root) = setup();
        write_snapshot(
            &root,
            r#"{"selected_main": ["Recruiting email"], "selected_deploy": [], "selected_additional": ["User training"], "timestamp": "2026-10-19 09:00:00"}"#,
        );

        let html = server.get("/").await.text();

        assert!(html.contains("name=\"main:Recruiting email\" checked>"));
        assert!(html.contains("name=\"additional:User training\" checked>"));
        assert_eq!(html.matches(" checked>").count(), 2);
    }

    #[tokio::test]
    async fn returns_generic_error_for_malformed_snapshot() {
        let (server, root) = setup();
        write_snapshot(&root, "not json");

        let response = server.get("/").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }
}

mod save {
    use super::*;

    #[tokio::test]
    async fn writes_submitted_checkboxes_and_shows_success() {
        let (server, root) = setup();

        let response = server
            .post("/save")
            .form(&[
                ("main:Stakeholder sign-off", "on"),
                ("main:Patient interactive chat", "on"),
                ("deploy:Security audit", "on"),
            ])
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(
            "Selections saved. Uncheck boxes to clear selections and click Save again."
        ));
        assert!(html.contains("name=\"deploy:Security audit\" checked>"));

        let snapshot = read_snapshot(&root);
        assert_eq!(
            snapshot.selected_main,
            vec!["Patient interactive chat", "Stakeholder sign-off"]
        );
        assert_eq!(snapshot.selected_deploy, vec!["Security audit"]);
        assert!(snapshot.selected_additional.is_empty());

        let doc = fs::read_to_string(root.path().join("intake/selected_agents.mdx"))
            .expect("Document should exist");
        assert!(doc.contains("- [Patient interactive chat](http://127.0.0.1:3005/)\n- Stakeholder sign-off"));
        assert!(doc.contains("## Additional Tasks\n\n_None selected_"));
    }

    #[tokio::test]
    async fn unchecking_everything_clears_the_snapshot() {
        let (server, root) = setup();
        write_snapshot(
            &root,
            r#"{"selected_main": ["Recruiting email"], "selected_deploy": ["Deploy endpoint"], "selected_additional": [], "timestamp": "2020-01-01 00:00:00"}"#,
        );

        server
            .post("/save")
            .form(&Vec::<(String, String)>::new())
            .await
            .assert_status_ok();

        let snapshot = read_snapshot(&root);
        assert!(snapshot.selected_main.is_empty());
        assert!(snapshot.selected_deploy.is_empty());
        assert!(snapshot.selected_additional.is_empty());
        assert_ne!(snapshot.timestamp, "2020-01-01 00:00:00");
    }

    #[tokio::test]
    async fn ignores_fields_for_unknown_items() {
        let (server, root) = setup();

        server
            .post("/save")
            .form(&[
                ("main:Write the release notes", "on"),
                ("bogus", "on"),
                ("other:User training", "on"),
                ("additional:Feedback collection", "on"),
            ])
            .await
            .assert_status_ok();

        let snapshot = read_snapshot(&root);
        assert!(snapshot.selected_main.is_empty());
        assert_eq!(snapshot.selected_additional, vec!["Feedback collection"]);
    }

    #[tokio::test]
    async fn fails_when_storage_is_not_writable() {
        let (server, root) = setup();
        fs::write(root.path().join("intake"), "not a directory").unwrap();

        let response = server
            .post("/save")
            .form(&[("main:Recruiting email", "on")])
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
        assert!(!root.path().join("json/selected_agents.json").exists());
    }
}

mod snapshot {
    use super::*;

    #[tokio::test]
    async fn returns_not_found_before_first_save() {
        let (server, _root) = setup();

        let response = server.get("/api/v1/snapshot").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn returns_the_last_save() {
        let (server, _root) = setup();
        server
            .post("/save")
            .form(&[("deploy:Deploy endpoint", "on")])
            .await
            .assert_status_ok();

        let response = server.get("/api/v1/snapshot").await;

        response.assert_status_ok();
        let snapshot: PersistedSnapshot = response.json();
        assert!(snapshot.selected_main.is_empty());
        assert_eq!(snapshot.selected_deploy, vec!["Deploy endpoint"]);
        assert!(snapshot.selected_additional.is_empty());
        assert_eq!(snapshot.timestamp.len(), "2026-10-19 09:00:00".len());
    }
}
