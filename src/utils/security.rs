use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString
    },
    Argon2
};

pub const MIN_PASSWORD_CHARS: usize = 6;

// Prefijos de los hashes bcrypt que escribía el panel anterior
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

// Hashear contraseña (Argon2id, sal aleatoria, formato PHC)
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    match argon2.hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(e) => Err(format!("Error al encriptar contraseña: {e}")),
    }
}

// Verificar contraseña. La comparación del hash es de tiempo constante.
// Un hash ilegible cuenta como contraseña incorrecta.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    if is_legacy_hash(password_hash) {
        return bcrypt::verify(password, password_hash).unwrap_or(false);
    }

    let parsed_hash = match PasswordHash::new(password_hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// Hash bcrypt heredado: hay que reemplazarlo por Argon2 tras un login correcto
pub fn is_legacy_hash(password_hash: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| password_hash.starts_with(prefix))
}

// Cuenta caracteres, no bytes: "ñandú1" tiene 6
pub fn is_acceptable_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}
