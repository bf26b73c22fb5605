//! Allocation configuration.

use super::error::AllocationError;

/// Configuration for an allocation run.
///
/// # Examples
///
/// ```
/// use u_allot::allocation::AllocationConfig;
///
/// let config = AllocationConfig::default()
///     .with_max_per_applicant(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationConfig {
    /// Upper bound on assignments held by any one applicant. Must be >= 1.
    pub max_per_applicant: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the seed actually used is reported in
    /// [`AllocationResult::seed`](super::AllocationResult::seed).
    pub seed: Option<u64>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_per_applicant: 1,
            seed: None,
        }
    }
}

impl AllocationConfig {
    /// Sets the per-applicant assignment bound.
    pub fn with_max_per_applicant(mut self, n: usize) -> Self {
        self.max_per_applicant = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.max_per_applicant < 1 {
            return Err(AllocationError::InvalidMaxPerApplicant(
                self.max_per_applicant,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AllocationConfig::default();
        assert_eq!(config.max_per_applicant, 1);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AllocationConfig::default()
            .with_max_per_applicant(3)
            .with_seed(7);
        assert_eq!(config.max_per_applicant, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_zero_max() {
        let config = AllocationConfig::default().with_max_per_applicant(0);
        assert!(matches!(
            config.validate(),
            Err(AllocationError::InvalidMaxPerApplicant(0))
        ));
    }
}
