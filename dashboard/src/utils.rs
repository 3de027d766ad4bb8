//! Utility functions

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

/// Version information for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Get version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown").to_string(),
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown").to_string(),
    }
}

/// Outcome of one diagnostic check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// Check the backend's version and database endpoints
pub async fn diagnose(client: &HttpClient) -> Vec<CheckResult> {
    let version = match client.backend_version().await {
        Ok(v) => check("backend version", Ok(v.version.unwrap_or_else(|| "unknown".into()))),
        Err(e) => check("backend version", Err(e)),
    };
    let db = match client.db_check().await {
        Ok(reply) => {
            let status = reply.db.unwrap_or_else(|| "unknown".into());
            CheckResult {
                name: "database",
                ok: status == "ok",
                detail: status,
            }
        }
        Err(e) => check("database", Err(e)),
    };
    vec![version, db]
}

fn check(name: &'static str, result: Result<String, DashboardError>) -> CheckResult {
    match result {
        Ok(detail) => CheckResult {
            name,
            ok: true,
            detail,
        },
        Err(e) => CheckResult {
            name,
            ok: false,
            detail: e.summary(),
        },
    }
}

/// Print a diagnostic report for the configured backend
///
/// Returns whether every check passed.
pub async fn run_diagnostic(client: &HttpClient) -> bool {
    let version = version_info();
    println!("{}", "slotwatch diagnostic".bold());
    println!("  dashboard  {} ({})", version.version, version.git_hash);
    println!("  backend    {}", client.base_url());

    let results = diagnose(client).await;
    for result in &results {
        let mark = if result.ok { "OK".green() } else { "FAIL".red() };
        println!("  [{}] {}: {}", mark, result.name, result.detail);
    }
    results.iter().all(|r| r.ok)
}
