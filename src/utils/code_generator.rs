//! Short code generation.
//!
//! Codes are sampled uniformly from the 62-character alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). Uniqueness is not guaranteed here; the service
//! layer retries against the store on collision.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Produces candidate short codes.
///
/// Abstracted behind a trait so collision handling can be exercised in tests
/// with a generator that returns known codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator sampling random alphanumeric codes.
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect()
    }
}
