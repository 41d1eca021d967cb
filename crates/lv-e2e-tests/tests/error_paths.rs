//! E2E tests for error paths and edge cases across crate boundaries.

mod helpers;

use serde_json::json;

use helpers::TestHarness;

/// A missing file is reported as zero records, not as a failure of the call.
#[tokio::test]
async fn e2e_missing_file_yields_zero_records() {
    let h = TestHarness::new();

    for tool in ["parse_logs", "search_logs", "log_frequency", "tail_logs", "log_stats"] {
        let result = h.run(tool, json!({"path": "ghost.log"})).await;
        assert_eq!(result["success"], false, "{tool}");
        assert_eq!(result["data"]["record_count"], 0, "{tool}");
        assert!(
            result["error"].as_str().unwrap().contains("ghost.log"),
            "{tool}"
        );
    }
}

/// Text with no record headers parses to nothing, successfully.
#[tokio::test]
async fn e2e_unstructured_file_is_empty_not_error() {
    let h = TestHarness::new();
    h.write_log("nginx.log", "127.0.0.1 - - [02/Mar/2024:09:15:00 +0000] \"GET / HTTP/1.1\" 200\n");

    let result = h.run("parse_logs", json!({"path": "nginx.log"})).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["record_count"], 0);

    let result = h.run("log_frequency", json!({"path": "nginx.log"})).await;
    assert_eq!(result["success"], true);
    assert!(result["data"]["buckets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn e2e_empty_file() {
    let h = TestHarness::new();
    h.write_log("empty.log", "");

    let result = h.run("log_stats", json!({"path": "empty.log"})).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["record_count"], 0);
}

/// Malformed headers are skipped; their lines fold into the previous body.
#[tokio::test]
async fn e2e_malformed_header_folds_into_previous_record() {
    let h = TestHarness::new();
    h.write_log(
        "mixed.log",
        "\
[2024-03-02 09:15:00] production.INFO: first
[2024-03-02 9:15:01] production.INFO: bad hour
[2024-03-02 09:15:02] production.ERROR: second
",
    );

    let result = h.run("parse_logs", json!({"path": "mixed.log"})).await;
    let records = result["data"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0]["message"],
        "first\n[2024-03-02 9:15:01] production.INFO: bad hour"
    );
    assert_eq!(records[1]["message"], "second");
}

#[tokio::test]
async fn e2e_invalid_regex_is_argument_error() {
    let h = TestHarness::with_app_log();
    let err = h
        .registry
        .execute(
            "search_logs",
            json!({"path": "app.log", "query": "(unclosed"}),
            &h.source,
        )
        .await
        .unwrap_err();
    assert!(err.contains("regex"));
}

#[tokio::test]
async fn e2e_unknown_tool() {
    let h = TestHarness::new();
    let err = h
        .registry
        .execute("query_journal", json!({"path": "app.log"}), &h.source)
        .await
        .unwrap_err();
    assert!(err.contains("query_journal"));
}

#[tokio::test]
async fn e2e_cli_rejects_missing_path() {
    let h = TestHarness::new();
    assert!(h.run_cli(&["lv-viewer", "parse"]).await.is_err());
}
