use std::process::Command;

fn main() {
    // Build date, RFC 3339 in UTC
    let build_date = chrono::Utc::now().to_rfc3339();

    // Last git commit hash, if the sources come from a git checkout
    let git_commit_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", git_commit_hash);
    println!("cargo:rerun-if-changed=.git/HEAD");
}
