//! Password digest - SHA-1 codec for k-anonymity range queries.

use data_encoding::HEXUPPER;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the full hex digest.
pub const DIGEST_LENGTH: usize = 40;

/// Length of the prefix sent to the range lookup service.
pub const PREFIX_LENGTH: usize = 5;

/// Uppercase hex SHA-1 digest of a password, split for k-anonymity lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

impl PasswordDigest {
    /// Computes the digest of a password.
    pub fn compute(password: &SecretString) -> Self {
        let hex = HEXUPPER.encode(Sha1::digest(password.expose_secret().as_bytes()).as_slice());
        PasswordDigest { hex }
    }

    /// The full 40-character uppercase hex digest.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// First five hex characters, sent to the lookup service.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LENGTH]
    }

    /// Remaining 35 hex characters, compared locally against leak records.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LENGTH..]
    }
}
