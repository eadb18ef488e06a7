// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine configuration.
//!
//! Every field has a default, so partial JSON documents deserialize into a
//! complete configuration.

use serde::{Deserialize, Serialize};

use crate::curve::SamplingConfig;
use crate::error::OrbitError;
use crate::math::{Tolerance, EPSILON};
use crate::words::LetterOrder;

/// Tunables for enumeration, sampling and the worker pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Relative epsilon behind every zero test.
    pub epsilon: f64,
    /// Windows for unbounded curves and traversal direction.
    pub sampling: SamplingConfig,
    /// Letter order within one word length.
    pub letter_order: LetterOrder,
    /// Worker threads for the application step; `0` uses every core.
    pub workers: usize,
    /// Minimum orbit size before the worker pool is used.
    pub parallel_threshold: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            sampling: SamplingConfig::default(),
            letter_order: LetterOrder::default(),
            workers: 0,
            parallel_threshold: 256,
        }
    }
}

impl OrbitConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), OrbitError> {
        Tolerance::new(self.epsilon)?;
        self.sampling.validate()?;
        if self.parallel_threshold == 0 {
            return Err(OrbitError::InvalidConfig(
                "parallel_threshold must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Tolerance built from `epsilon`.
    pub fn tolerance(&self) -> Result<Tolerance, OrbitError> {
        Tolerance::new(self.epsilon)
    }
}
