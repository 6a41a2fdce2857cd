pub mod error;
pub mod hashing;
pub mod keys;
pub mod signing;

pub use error::CryptoError;
pub use hashing::{grant_digest, hash, Hash};
pub use keys::{KeyPair, PublicKey};
pub use signing::{sign, sign_grant, verify, verify_grant, Signature};
