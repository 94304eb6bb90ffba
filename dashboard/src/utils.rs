//! Utility functions

use serde::{Deserialize, Serialize};

/// Version information for the dashboard binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Get version information stamped at build time
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown").to_string(),
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown").to_string(),
    }
}

/// Parse `--key=value` and `--flag` arguments into a map
pub fn parse_cli_args<I>(args: I) -> std::collections::HashMap<String, String>
where
    I: IntoIterator<Item = String>,
{
    let mut cli_args = std::collections::HashMap::new();
    for arg in args {
        if let Some((key, value)) = arg.split_once('=') {
            cli_args.insert(key.trim_start_matches('-').to_string(), value.to_string());
        } else if arg.starts_with("--") {
            cli_args.insert(arg.trim_start_matches('-').to_string(), "true".to_string());
        }
    }
    cli_args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_args() {
        let args = ["--deploy", "--form=/tmp/form.json", "--base-url=http://h:8080/?a=b", "stray"]
            .into_iter()
            .map(String::from);
        let parsed = parse_cli_args(args);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["deploy"], "true");
        assert_eq!(parsed["form"], "/tmp/form.json");
        assert_eq!(parsed["base-url"], "http://h:8080/?a=b");
    }

    #[test]
    fn test_version_info() {
        assert_eq!(version_info().version, env!("CARGO_PKG_VERSION"));
    }
}
