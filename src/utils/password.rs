use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_ITERATIONS: u32 = 260_000;
const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;
const SCHEME: &str = "pbkdf2:sha256";

/// Politique d'encodage des mots de passe
/// Format stocké: pbkdf2:sha256:iterations$salt$hash (salt + hash en base64 URL-safe sans padding)
#[derive(Debug, Clone, Copy)]
pub struct PasswordEncoder {
    iterations: u32,
}

impl Default for PasswordEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordEncoder {
    pub fn new(iterations: u32) -> Self {
        Self { iterations: iterations.max(1) }
    }

    /// Hash un mot de passe avec un salt aléatoire de 16 bytes
    pub fn encode(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LENGTH];
        rand::thread_rng().fill(&mut salt);

        let mut key = [0u8; KEY_LENGTH];
        pbkdf2::<HmacSha256>(password.as_bytes(), &salt, self.iterations, &mut key)
            .map_err(|e| AppError::PasswordHash(e.to_string()))?;

        Ok(format!(
            "{}:{}${}${}",
            SCHEME,
            self.iterations,
            URL_SAFE_NO_PAD.encode(salt),
            URL_SAFE_NO_PAD.encode(key)
        ))
    }

    /// Vérifie un mot de passe contre un hash stocké
    /// Les itérations et le salt viennent du hash, pas de la politique courante
    pub fn matches(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = ParsedHash::parse(stored_hash)?;

        let mut computed = vec![0u8; parsed.hash.len()];
        pbkdf2::<HmacSha256>(password.as_bytes(), &parsed.salt, parsed.iterations, &mut computed)
            .map_err(|e| AppError::PasswordHash(e.to_string()))?;

        Ok(constant_time_eq(&computed, &parsed.hash))
    }
}

struct ParsedHash {
    iterations: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl ParsedHash {
    fn parse(stored_hash: &str) -> Result<Self, AppError> {
        let invalid = || AppError::PasswordHash("invalid hash format".to_string());

        let mut parts = stored_hash.split('$');
        let (Some(header), Some(salt), Some(hash), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let iterations = header
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(invalid)?;

        let salt = decode_part(salt)?;
        let hash = decode_part(hash)?;
        if hash.is_empty() {
            return Err(invalid());
        }

        Ok(Self { iterations, salt, hash })
    }
}

/// Décode une partie du hash: base64 URL-safe, ou hexadécimal pour les anciens hash
fn decode_part(input: &str) -> Result<Vec<u8>, AppError> {
    if input.len() == 64 && input.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex::decode(input).map_err(|e| AppError::PasswordHash(format!("hex decode failed: {}", e)));
    }

    URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|e| AppError::PasswordHash(format!("base64 decode failed: {}", e)))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
