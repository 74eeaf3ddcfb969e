use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tempfile::TempDir;

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_course-search"))
}

/// Writes three campus catalogs (one malformed) and a config pointing at them.
fn setup_test_env(port: u16) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    let manoa: Vec<serde_json::Value> = (0..8)
        .map(|i| {
            serde_json::json!({
                "course_id": format!("m{}", i),
                "course_prefix": "ICS",
                "course_number": format!("{}", 300 + i),
                "course_title": format!("Data Systems {}", i),
                "dept_name": "Information & Computer Sciences",
                "num_units": "3",
            })
        })
        .chain(std::iter::once(serde_json::json!({
            "course_id": "m-hist",
            "course_prefix": "HIST",
            "course_number": "151",
            "course_title": "World History",
            "dept_name": "History",
        })))
        .collect();
    fs::write(
        data_dir.join("manoa.json"),
        serde_json::to_string(&manoa).unwrap(),
    )
    .unwrap();

    fs::write(
        data_dir.join("leeward.json"),
        r#"[
            {"course_prefix": "BIOL", "course_number": "101", "course_title": "General Biology", "dept_name": "Natural Sciences"},
            {"course_prefix": "ICS", "course_number": "100", "course_title": "Computing Literacy", "dept_name": "Data & Computing"}
        ]"#,
    )
    .unwrap();

    fs::write(data_dir.join("maui.json"), r#"{"error": "export failed"}"#).unwrap();

    let config_content = format!(
        r#"[server]
bind = "127.0.0.1:{}"

[catalog]
dir = "{}/data"

[[catalog.campuses]]
name = "Leeward Community College"
file = "leeward.json"

[[catalog.campuses]]
name = "Manoa"
file = "manoa.json"

[[catalog.campuses]]
name = "University of Hawai‘i Maui College"
file = "maui.json"
"#,
        port,
        root.display()
    );

    let config_path = config_dir.join("course-search.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_cli(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_campuses_lists_counts() {
    let (_tmp, config_path) = setup_test_env(0);

    let (stdout, stderr, success) = run_cli(&config_path, &["campuses"]);
    assert!(success, "campuses failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Leeward Community College"));
    assert!(stdout.contains("total courses: 11"));
}

#[test]
fn test_search_cli() {
    let (_tmp, config_path) = setup_test_env(0);

    let (stdout, stderr, success) = run_cli(
        &config_path,
        &["search", "data", "--campus", "Manoa", "--limit", "5"],
    );
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("total: 8 (showing 5)"));
    assert!(stdout.contains("ICS 300"));
    assert!(!stdout.contains("ICS 305"));
}

#[test]
fn test_search_cli_without_terms() {
    let (_tmp, config_path) = setup_test_env(0);

    let (stdout, _, success) = run_cli(&config_path, &["search", "--campus", "Manoa"]);
    assert!(success);
    assert!(stdout.contains("Please include a search query"));
}

#[test]
fn test_search_cli_no_results() {
    let (_tmp, config_path) = setup_test_env(0);

    let (stdout, _, success) = run_cli(&config_path, &["search", "astrophysics"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_cli(&tmp.path().join("nope.toml"), &["campuses"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_career_commands_need_no_config() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("absent.toml");

    let (stdout, _, success) = run_cli(&config_path, &["career", "codes", "Web Developer"]);
    assert!(success);
    let codes: Vec<&str> = stdout.lines().collect();
    assert_eq!(codes, vec!["11.0101", "11.0201", "11.0701", "11.0801"]);

    let (stdout, _, _) = run_cli(&config_path, &["career", "codes", "unknown xyz career"]);
    assert_eq!(stdout.trim(), "No mapping.");

    let (stdout, _, _) = run_cli(&config_path, &["career", "check", "Chef"]);
    assert_eq!(stdout.trim(), "true");

    let (stdout, _, _) = run_cli(&config_path, &["career", "keywords", "nurse"]);
    let keywords: Vec<&str> = stdout.lines().collect();
    assert_eq!(keywords[0], "nurse");
    assert_eq!(keywords[1], "nurse");
    assert_eq!(keywords[2], "nursing");

    let (stdout, _, success) = run_cli(&config_path, &["prefixes", "electrical engineering"]);
    assert!(success);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["EE", "ECE"]);
}

// ============ Server Integration Tests ============

/// Find an available port for the test server.
fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Background server process, killed when dropped so a failing assertion
/// does not leave it running.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.0.kill().ok();
        self.0.wait().ok();
    }
}

/// Start the server in the background.
fn start_server(config_path: &Path) -> ServerGuard {
    let child = Command::new(binary())
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .arg("serve")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to start server: {}", e));
    ServerGuard(child)
}

/// Wait for the server to be ready by polling the health endpoint.
fn wait_for_server(port: u16) {
    let url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        std::thread::sleep(std::time::Duration::from_millis(100));
        if let Ok(resp) = reqwest::blocking::get(&url) {
            if resp.status().is_success() {
                return;
            }
        }
    }
    panic!("Server did not become ready within 5 seconds");
}

#[test]
fn test_server_search() {
    let port = find_free_port();
    let (_tmp, config_path) = setup_test_env(port);

    let _server = start_server(&config_path);
    wait_for_server(port);

    let base = format!("http://127.0.0.1:{}/api/programs-courses", port);

    let body: serde_json::Value =
        reqwest::blocking::get(format!("{}?q=data&campus=Manoa&limit=5", base))
            .unwrap()
            .json()
            .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 8);
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
    assert_eq!(body["results"][0]["course_id"], "m0");
    assert_eq!(body["results"][0]["num_units"], "3");
    assert_eq!(body["results"][0]["campus"], "Manoa");

    // Leeward matches "data" through its department; catalog order puts it first.
    let body: serde_json::Value = reqwest::blocking::get(format!("{}?q=DATA&limit=500", base))
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(body["total"], 9);
    assert_eq!(body["results"][0]["campus"], "Leeward Community College");

    let resp = reqwest::blocking::get(format!("{}?campus=Manoa", base)).unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["total"], 0);
    assert!(body["message"].is_string());
    assert_eq!(body["results"], serde_json::json!([]));

    let body: serde_json::Value = reqwest::blocking::get(format!(
        "{}?keyword=history&keyword=biology,%20&campus=manoa&campus=Leeward%20Community%20College",
        base
    ))
    .unwrap()
    .json()
    .unwrap();
    assert_eq!(body["total"], 2);

    let health: serde_json::Value =
        reqwest::blocking::get(format!("http://127.0.0.1:{}/health", port))
            .unwrap()
            .json()
            .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["courses"], 11);
}
