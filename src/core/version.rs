/// Name printed in front of the version number.
const TOOL_NAME: &str = "jformat-options";

/// Local version from Cargo.toml, captured at compile time.
pub fn local_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The line printed for `--version`.
pub fn version_string() -> String {
    format!("{TOOL_NAME} {}", local_version())
}
