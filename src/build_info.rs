//! Commit hash and build date, stamped by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `"<date> (<commit>)"`, as printed by `replay --version`.
pub fn version_line() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}
