const SENSITIVE_QUERY_KEYS: &[&str] = &["apikey", "access_token", "token"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedUri {
    pub uri: String,
    /// Query keys whose values were replaced, as they appeared in the URI.
    pub redacted: Vec<String>,
}

/// Replaces the values of credential-bearing query parameters with `***`.
pub fn mask_uri_secrets(uri: &str) -> MaskedUri {
    let Some((path, query)) = uri.split_once('?') else {
        return MaskedUri {
            uri: uri.to_string(),
            redacted: Vec::new(),
        };
    };

    let mut redacted = Vec::new();
    let masked: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SENSITIVE_QUERY_KEYS.contains(&key.to_ascii_lowercase().as_str()) => {
                redacted.push(key.to_string());
                format!("{key}=***")
            }
            _ => pair.to_string(),
        })
        .collect();

    MaskedUri {
        uri: format!("{path}?{}", masked.join("&")),
        redacted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_uri_alone() {
        let masked = mask_uri_secrets("/get-user-name");

        assert_eq!(masked.uri, "/get-user-name");
        assert!(masked.redacted.is_empty());
    }

    #[test]
    fn masks_only_sensitive_params() {
        let masked = mask_uri_secrets("/?apikey=abc&user=1&token=xyz");

        assert_eq!(masked.uri, "/?apikey=***&user=1&token=***");
        assert_eq!(masked.redacted, vec!["apikey", "token"]);
    }

    #[test]
    fn key_match_ignores_case() {
        let masked = mask_uri_secrets("/?ApiKey=abc");

        assert_eq!(masked.uri, "/?ApiKey=***");
        assert_eq!(masked.redacted, vec!["ApiKey"]);
    }
}
