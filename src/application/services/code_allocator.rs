//! Short code allocation: custom code validation and random generation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{MAX_CODE_LENGTH, generate_code, validate_code_format};

/// Retry and escalation settings for random code generation.
///
/// Generation tries `attempts_per_length` codes at `base_length`. When every
/// draw collides, the length grows by `escalation_step` and the count starts
/// over, until `max_length` has been exhausted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub base_length: usize,
    pub attempts_per_length: usize,
    pub escalation_step: usize,
    pub max_length: usize,
}

impl AllocationPolicy {
    /// Default policy with a custom starting length.
    pub fn with_base_length(base_length: usize) -> Self {
        Self {
            base_length,
            ..Self::default()
        }
    }

    /// Upper bound on draws across every length the policy visits.
    pub fn max_attempts(&self) -> usize {
        self.lengths().count() * self.attempts_per_length
    }

    /// Code lengths in the order they are tried.
    fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        (self.base_length..=self.max_length).step_by(self.escalation_step.max(1))
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            base_length: 6,
            attempts_per_length: 10,
            escalation_step: 2,
            max_length: MAX_CODE_LENGTH,
        }
    }
}

/// Produces codes that are well-formed and not yet present in the store.
///
/// Only read-only existence checks are performed here; the caller inserts.
/// A code returned as free may still be taken by a concurrent insert before
/// the caller's own insert, which the store reports as
/// [`LinkError::AlreadyExists`].
pub struct CodeAllocator<L: LinkRepository> {
    link_repository: Arc<L>,
    policy: AllocationPolicy,
}

impl<L: LinkRepository> CodeAllocator<L> {
    /// Creates an allocator with the given policy.
    pub fn new(link_repository: Arc<L>, policy: AllocationPolicy) -> Self {
        Self {
            link_repository,
            policy,
        }
    }

    /// Accepts a caller-supplied code if it is well-formed and unused.
    ///
    /// The candidate is returned unchanged, case included.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidFormat`] if the code fails the format rule
    /// - [`LinkError::AlreadyExists`] if the code is taken
    /// - [`LinkError::Storage`] on database errors
    pub async fn validate_custom(&self, candidate: &str) -> Result<String, LinkError> {
        validate_code_format(candidate)?;

        if self.link_repository.exists(candidate).await? {
            return Err(LinkError::already_exists(candidate));
        }

        Ok(candidate.to_string())
    }

    /// Generates a random code that is not currently in the store.
    ///
    /// # Errors
    ///
    /// - [`LinkError::Exhausted`] if every length up to `max_length` collided
    /// - [`LinkError::Storage`] on database errors
    pub async fn generate(&self) -> Result<String, LinkError> {
        let mut attempts = 0;

        for length in self.policy.lengths() {
            if length > self.policy.base_length {
                warn!(
                    "All {} draws at length {} collided, escalating to length {}",
                    self.policy.attempts_per_length,
                    length - self.policy.escalation_step.max(1),
                    length
                );
            }

            for _ in 0..self.policy.attempts_per_length {
                attempts += 1;
                let code = generate_code(length);

                if !self.link_repository.exists(&code).await? {
                    return Ok(code);
                }

                debug!("Generated code {} collided", code);
            }
        }

        Err(LinkError::Exhausted { attempts })
    }
}
