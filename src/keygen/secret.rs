//! Zeroed-on-drop container for exported private-key material

use std::ops::Deref;

use zeroize::Zeroize;

/// PKCS8 DER bytes of a private key, zeroed when dropped
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretDer(Vec<u8>);

impl SecretDer {
    pub fn new(der: Vec<u8>) -> Self {
        Self(der)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for SecretDer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for SecretDer {
    fn from(der: Vec<u8>) -> Self {
        Self::new(der)
    }
}

// Prevent accidental debug printing of key material
impl std::fmt::Debug for SecretDer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretDer")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_der_deref() {
        let secret = SecretDer::new(vec![1, 2, 3, 4]);
        assert_eq!(secret.len(), 4);
        assert_eq!(&*secret, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_secret_der_debug_is_redacted() {
        let secret = SecretDer::new(vec![0xDE, 0xAD]);
        let printed = format!("{:?}", secret);
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("222"));
    }
}
