use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use serde::Serialize;
use std::time::UNIX_EPOCH;

#[derive(Clone)]
pub struct JWTAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: i32,
    exp: usize,
}

impl JWTAuth {
    const EXPIRE_TIME: u64 = 60 * 60;

    pub fn from_secret(secret: &[u8]) -> JWTAuth {
        JWTAuth {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn create_token(&self, user_id: i32) -> String {
        let claims = Claims {
            user_id,
            exp: Self::generate_exp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).unwrap()
    }

    /// Signature plus expiry check; every failure mode collapses into the
    /// one opaque error.
    pub fn validate_token(&self, token: &str) -> Result<i32, jsonwebtoken::errors::Error> {
        let claim =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(claim.claims.user_id)
    }

    fn generate_exp() -> usize {
        (std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + Self::EXPIRE_TIME) as usize
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::jwt::{Claims, JWTAuth};
    use base64::Engine;
    use jsonwebtoken::{EncodingKey, Header};

    #[test]
    fn valid_token() {
        let secret: [u8; 32] = rand::random();
        let jwt_auth = JWTAuth::from_secret(&secret);

        let token = jwt_auth.create_token(42);
        assert_eq!(jwt_auth.validate_token(&token).unwrap(), 42);
    }

    #[test]
    fn tampered_signature() {
        let secret: [u8; 32] = rand::random();
        let jwt_auth = JWTAuth::from_secret(&secret);

        let token = jwt_auth.create_token(42);
        let (payload, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.ends_with('A') { "B" } else { "A" };
        let tampered = format!(
            "{}.{}{}",
            payload,
            &signature[..signature.len() - 1],
            flipped
        );
        assert!(jwt_auth.validate_token(&tampered).is_err());
    }

    #[test]
    fn expired_token() {
        let secret: [u8; 32] = rand::random();
        let jwt_auth = JWTAuth::from_secret(&secret);

        // far past any validation leeway
        let claims = Claims {
            user_id: 42,
            exp: 1,
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(&secret))
                .unwrap();
        assert!(jwt_auth.validate_token(&token).is_err());
    }

    #[test]
    fn invalid_token() {
        let secret: [u8; 32] = rand::random();
        let jwt_auth = JWTAuth::from_secret(&secret);

        let token_bytes: [u8; 32] = rand::random();
        let base64_engine = base64::engine::general_purpose::STANDARD;
        let token = base64_engine.encode(token_bytes);
        assert!(jwt_auth.validate_token(&token).is_err())
    }
}
