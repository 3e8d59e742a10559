//! Password strength policy shared by the reset flow.
//!
//! A password passes when it is at least [`MIN_PASSWORD_LEN`] ASCII
//! alphanumerics long and mixes lowercase, uppercase, and digits. Symbols are
//! rejected outright rather than counted toward strength.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 13;

/// Inline message shown under the form when the policy rejects a password.
pub const PASSWORD_POLICY_MESSAGE: &str =
    "La contraseña debe tener al menos 13 caracteres, una letra mayúscula, una letra minúscula y un número.";

/// Return `true` if `password` satisfies the strength policy.
pub fn is_strong_password(password: &str) -> bool {
    if password.len() < MIN_PASSWORD_LEN || !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    has_lower && has_upper && has_digit
}
