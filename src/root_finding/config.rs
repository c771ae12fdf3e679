//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default precision and iteration cap,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `decimal_places` : requested precision; tolerance is `0.5 * 10^-decimal_places`
//! └ `max_iter`       : iteration cap (optional, see [`Algorithm::default_max_iter`])
//!
//! Bisection has one extra field selecting its non-convergence policy.

use super::algorithms::Algorithm;


pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Beyond this the tolerance drops under `f64` resolution for typical roots.
pub const MAX_DECIMAL_PLACES: u32 = 15;


/// Tolerance for a requested number of correct decimal places.
///
/// `0.5 * 10^-decimal_places`, e.g. `2` -> `0.005`.
#[inline]
pub fn tolerance_for(decimal_places: u32) -> f64 {
    0.5 * 10f64.powi(-(decimal_places as i32))
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    decimal_places: u32,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            decimal_places : DEFAULT_DECIMAL_PLACES,
            max_iter       : None,
        }
    }

    // getters
    pub fn decimal_places(&self) -> u32 { self.decimal_places }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }
    pub fn tolerance(&self) -> f64 { tolerance_for(self.decimal_places) }

    /// `max_iter` if set, else the algorithm's default.
    pub fn resolved_max_iter(&self, algorithm: Algorithm) -> usize {
        self.max_iter.unwrap_or(algorithm.default_max_iter())
    }

    // setters (internal)
    pub(crate) fn with_decimal_places (&mut self, v: u32)   { self.decimal_places = v; }
    pub(crate) fn with_max_iter       (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_decimal_places(
                mut self, v: u32
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v > $crate::root_finding::config::MAX_DECIMAL_PLACES {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidDecimalPlaces {
                            got: v,
                            max: $crate::root_finding::config::MAX_DECIMAL_PLACES,
                        }
                    );
                }
                self.common.with_decimal_places(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn decimal_places(&self) -> u32 { self.common.decimal_places() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
            #[inline] #[must_use] pub fn tolerance(&self) -> f64 { self.common.tolerance() }
        }
    };
}
pub(crate) use impl_common_cfg;
