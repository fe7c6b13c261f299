use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{AppError, TokenError};
use crate::token::claims::Claims;

/// Signs and checks HS256 tokens with a single shared secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issues a token for `user` that expires `duration_secs` from now.
    pub fn issue(&self, user: &str, duration_secs: i64) -> Result<String, AppError> {
        self.issue_at(user, duration_secs, Utc::now().timestamp())
    }

    pub fn issue_at(&self, user: &str, duration_secs: i64, now: i64) -> Result<String, AppError> {
        let exp = now
            .checked_add(duration_secs)
            .ok_or(AppError::OutOfRange { param: "duration" })?;
        let claims = Claims::new(user, exp);

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Full check: signature and `exp`, with no clock leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }

    /// Checks the signature only, so expired tokens still decode.
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub"]);

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::claims::CHANNELS;

    const SECRET: &[u8] = b"unit-test-secret-with-enough-bytes!!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET)
    }

    #[test]
    fn issued_token_round_trips() {
        let now = Utc::now().timestamp();
        let token = issuer().issue_at("alice", 300, now).unwrap();

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, now + 300);
        assert_eq!(claims.channels, CHANNELS);
    }

    #[test]
    fn token_has_three_segments() {
        let token = issuer().issue("alice", 60).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| !p.is_empty() && !p.contains('=')));
    }

    #[test]
    fn wrong_secret_fails_signature_check() {
        let token = issuer().issue("alice", 300).unwrap();
        let other = TokenIssuer::new(b"some-other-secret");

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
        assert_eq!(
            other.decode_ignoring_expiry(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn negative_duration_is_expired_but_decodable() {
        let now = Utc::now().timestamp();
        let token = issuer().issue_at("dave", -1, now).unwrap();

        assert_eq!(issuer().verify(&token), Err(TokenError::Expired));

        let claims = issuer().decode_ignoring_expiry(&token).unwrap();
        assert_eq!(claims.sub, "dave");
        assert!(claims.exp < now);
    }

    #[test]
    fn same_second_gives_identical_tokens() {
        let a = issuer().issue_at("erin", 3600, 1_700_000_000).unwrap();
        let b = issuer().issue_at("erin", 3600, 1_700_000_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn a_second_apart_only_payload_and_signature_differ() {
        let a = issuer().issue_at("erin", 3600, 1_700_000_000).unwrap();
        let b = issuer().issue_at("erin", 3600, 1_700_000_001).unwrap();
        let (a, b): (Vec<&str>, Vec<&str>) = (a.split('.').collect(), b.split('.').collect());

        assert_eq!(a[0], b[0]);
        assert_ne!(a[1], b[1]);
        assert_ne!(a[2], b[2]);
    }

    #[test]
    fn overflowing_expiry_is_rejected() {
        let err = issuer().issue_at("frank", i64::MAX, 1).unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { .. }));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            issuer().verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", issuer());
        assert!(!rendered.contains("unit-test-secret"));
    }
}
