use bcrypt::BcryptError;

const COST: u32 = 10;

pub fn encode_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, COST)
}

/// Constant-time comparison against the stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, password_hash)
}

#[cfg(test)]
mod tests {
    use super::{encode_password, verify_password};

    #[test]
    fn verify_accepts_the_original_password() {
        let hash = encode_password("p@ss").unwrap();
        assert!(verify_password("p@ss", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_a_different_password() {
        let hash = encode_password("p@ss").unwrap();
        assert!(!verify_password("x", &hash).unwrap());
    }

    #[test]
    fn hashes_carry_cost_10_and_a_fresh_salt() {
        let first = encode_password("p@ss").unwrap();
        let second = encode_password("p@ss").unwrap();
        assert!(first.starts_with("$2b$10$"));
        assert_ne!(first, second);
    }
}
