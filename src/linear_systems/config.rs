//! Configuration for the iterative solvers.
//!
//! [`IterativeCfg`]
//! ├ `decimal_places` : requested precision (default 3); tolerance is `0.5 * 10^-decimal_places`
//! └ `max_iter`       : iteration cap (default 100); reaching it is reported, not fatal

use super::errors::LinearSystemError;
use crate::root_finding::config::{tolerance_for, MAX_DECIMAL_PLACES};

pub const DEFAULT_DECIMAL_PLACES: u32  = 3;
pub const DEFAULT_MAX_ITER:       usize = 100;

#[derive(Debug, Copy, Clone)]
pub struct IterativeCfg {
    decimal_places: u32,
    max_iter:       usize,
}

impl IterativeCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            max_iter:       DEFAULT_MAX_ITER,
        }
    }

    pub fn set_decimal_places(mut self, v: u32) -> Result<Self, LinearSystemError> {
        if v > MAX_DECIMAL_PLACES {
            return Err(LinearSystemError::InvalidDecimalPlaces { got: v, max: MAX_DECIMAL_PLACES });
        }
        self.decimal_places = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, LinearSystemError> {
        if v == 0 {
            return Err(LinearSystemError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn decimal_places(&self) -> u32 { self.decimal_places }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }
    #[inline] #[must_use] pub fn tolerance(&self) -> f64 { tolerance_for(self.decimal_places) }
}

impl Default for IterativeCfg {
    fn default() -> Self { Self::new() }
}
