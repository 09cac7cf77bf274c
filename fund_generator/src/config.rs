//! Resolution of the provider credential.
//!
//! The token comes from `--token` (or the `IEX_CLOUD_API_TOKEN` environment
//! variable) and falls back to a local, untracked token file. The file holds
//! either the bare token or a single `IEX_CLOUD_API_TOKEN = 'value'` line.
use std::fmt;
use std::fs;
use std::path::Path;

use fund_common::{FundError, Result};

/// Opaque provider credential. Never printed.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a raw token, rejecting blank values.
    pub fn new(raw: &str) -> Result<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(FundError::Config("API token is empty".to_string()));
        }
        Ok(ApiToken(token.to_string()))
    }

    /// Token text, for the request query only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Pick the token from the CLI/environment value, else from `token_file`.
pub fn resolve_token(token: Option<&str>, token_file: Option<&Path>) -> Result<ApiToken> {
    if let Some(raw) = token {
        return ApiToken::new(raw);
    }
    let Some(path) = token_file else {
        return Err(FundError::Config(
            "no API token: pass --token, set IEX_CLOUD_API_TOKEN, or use --token-file".to_string(),
        ));
    };
    let contents = fs::read_to_string(path).map_err(|e| {
        FundError::Config(format!("cannot read token file {}: {}", path.display(), e))
    })?;
    parse_token_file(&contents)
}

fn parse_token_file(contents: &str) -> Result<ApiToken> {
    let line = contents
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| FundError::Config("token file is empty".to_string()))?;

    let value = match line.split_once('=') {
        Some((_, value)) => value.trim(),
        None => line,
    };
    let unquoted = value
        .strip_prefix(['\'', '"'])
        .and_then(|s| s.strip_suffix(['\'', '"']))
        .unwrap_or(value);
    ApiToken::new(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_token_wins_over_file() {
        let token = resolve_token(Some(" pk_live "), Some(Path::new("/does/not/exist"))).unwrap();
        assert_eq!(token.expose(), "pk_live");
    }

    #[test]
    fn bare_token_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n  pk_from_file  \n").unwrap();
        let token = resolve_token(None, Some(file.path())).unwrap();
        assert_eq!(token.expose(), "pk_from_file");
    }

    #[test]
    fn assignment_token_file() {
        let token = parse_token_file("# personal token\nIEX_CLOUD_API_TOKEN = 'pk_abc123'\n").unwrap();
        assert_eq!(token.expose(), "pk_abc123");
    }

    #[test]
    fn missing_sources_are_config_errors() {
        assert!(matches!(resolve_token(None, None), Err(FundError::Config(_))));
        assert!(matches!(
            resolve_token(None, Some(Path::new("/does/not/exist/token"))),
            Err(FundError::Config(_))
        ));
        assert!(matches!(parse_token_file("\n\n"), Err(FundError::Config(_))));
        assert!(matches!(ApiToken::new("   "), Err(FundError::Config(_))));
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = ApiToken::new("pk_secret").unwrap();
        assert_eq!(format!("{token:?}"), "ApiToken(***)");
    }
}
