//! Stamps the replay binary with the commit and build date.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}

fn main() {
    // CI passes these in; local builds ask git and the clock
    let commit = env::var("SNAKE_BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let today = || chrono::Utc::now().format("%Y-%m-%d").to_string();
    let date = match env::var("SNAKE_BUILD_DATE") {
        Ok(date) if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok() => date,
        Ok(date) => {
            println!("cargo:warning=ignoring SNAKE_BUILD_DATE={date:?}, expected YYYY-MM-DD");
            today()
        }
        Err(_) => today(),
    };

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let contents = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\npub const BUILD_DATE: &str = {date:?};\n"
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), contents)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SNAKE_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=SNAKE_BUILD_DATE");
}
