use std::process::{Command, Output};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// Run the CLI binary with arguments, isolated from JUMPCLOUD_* variables.
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jcapi-export"));
    cmd.args(args);
    for var in [
        "JUMPCLOUD_API_KEY",
        "JUMPCLOUD_COMMAND_ID",
        "JUMPCLOUD_OUT",
        "JUMPCLOUD_API_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli_async(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args)
    })
    .await
    .expect("CLI task panicked")
}

/// Mount a results endpoint for `command_id` returning `body`.
pub async fn mount_results(server: &MockServer, command_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/commands/{}/results", command_id)))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
