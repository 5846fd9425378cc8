//! HTTP Digest authentication for RPC endpoints.
//!
//! monerod (`--rpc-login`) and monero-wallet-rpc protect their JSON-RPC
//! port with Digest auth. The challenge/response math is delegated to the
//! `digest_auth` crate; this module only picks the challenge and feeds it the
//! request being retried.

use std::fmt;

use digest_auth::AuthContext;
use reqwest::header::{HeaderMap, WWW_AUTHENTICATE};

/// Username/password pair used to answer Digest challenges.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Build an `Authorization` header value answering the first usable
    /// Digest challenge in `headers`.
    ///
    /// `uri` is the request-target (path and query) and `body` the exact bytes
    /// that will be resent. Returns `None` when no challenge can be answered.
    pub fn answer_challenge(&self, headers: &HeaderMap, uri: &str, body: &[u8]) -> Option<String> {
        let context = AuthContext::new_post(
            self.username.as_str(),
            self.password.as_str(),
            uri,
            Some(body),
        );

        for value in headers.get_all(WWW_AUTHENTICATE) {
            let Ok(challenge) = value.to_str() else {
                continue;
            };
            if !is_digest(challenge) {
                continue;
            }
            match digest_auth::parse(challenge) {
                Ok(mut prompt) => match prompt.respond(&context) {
                    Ok(answer) => return Some(answer.to_header_string()),
                    Err(e) => tracing::warn!(error = %e, "Cannot answer digest challenge"),
                },
                Err(e) => tracing::warn!(error = %e, "Malformed digest challenge"),
            }
        }
        None
    }
}

fn is_digest(challenge: &str) -> bool {
    challenge
        .trim_start()
        .get(..6)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn challenge_headers(values: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(WWW_AUTHENTICATE, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("monero", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("monero"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_answers_digest_challenge() {
        let creds = Credentials::new("monero", "hunter2");
        let headers = challenge_headers(&[
            r#"Digest realm="monero-rpc", qop="auth", algorithm=MD5, nonce="6f9c2a""#,
        ]);
        let answer = creds
            .answer_challenge(&headers, "/json_rpc", b"{}")
            .expect("challenge should be answerable");
        assert!(answer.starts_with("Digest "));
        assert!(answer.contains(r#"username="monero""#));
        assert!(answer.contains(r#"uri="/json_rpc""#));
        assert!(answer.contains("response="));
        assert!(!answer.contains("hunter2"));
    }

    #[test]
    fn test_skips_non_digest_challenges() {
        let creds = Credentials::new("monero", "hunter2");
        let headers = challenge_headers(&[r#"Basic realm="monero-rpc""#]);
        assert!(creds.answer_challenge(&headers, "/json_rpc", b"{}").is_none());
        assert!(creds
            .answer_challenge(&HeaderMap::new(), "/json_rpc", b"{}")
            .is_none());
    }

    #[test]
    fn test_picks_digest_among_several_challenges() {
        let creds = Credentials::new("monero", "hunter2");
        let headers = challenge_headers(&[
            r#"Basic realm="other""#,
            r#"Digest realm="monero-rpc", qop="auth", algorithm=MD5, nonce="a1""#,
        ]);
        assert!(creds.answer_challenge(&headers, "/json_rpc", b"{}").is_some());
    }
}
