const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");
const GIT_COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");

pub fn version() -> &'static str {
    PKG_VERSION
}

pub fn build_date() -> &'static str {
    BUILD_DATE
}

pub fn git_commit_hash() -> &'static str {
    GIT_COMMIT_HASH
}

pub fn long_version() -> String {
    format!("{} ({} built {})", version(), git_commit_hash(), build_date())
}
