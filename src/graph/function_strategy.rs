// src/graph/function_strategy.rs

use crate::constants::{ARCTAN_SINGULARITY_EPSILON, SINE_AMPLITUDE};

/// A plottable real function selected at runtime.
///
/// `evaluate` returns `None` where the function is undefined.
pub trait FunctionStrategy: Send + Sync {
    /// Name shown in the function selector.
    fn name(&self) -> &'static str;

    fn evaluate(&self, x: f64) -> Option<f64>;
}

/// y = (3x + 1) / atan(x), undefined near the singularity at x = 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArctanRatio;

impl FunctionStrategy for ArctanRatio {
    fn name(&self) -> &'static str {
        "y = (3x + 1) / arctg(x)"
    }

    fn evaluate(&self, x: f64) -> Option<f64> {
        if x.abs() < ARCTAN_SINGULARITY_EPSILON {
            return None;
        }
        Some((3.0 * x + 1.0) / x.atan())
    }
}

/// y = 5 sin(x), defined everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledSine;

impl FunctionStrategy for ScaledSine {
    fn name(&self) -> &'static str {
        "y = 5 sin(x)"
    }

    fn evaluate(&self, x: f64) -> Option<f64> {
        Some(SINE_AMPLITUDE * x.sin())
    }
}

/// Functions offered by the selector, primary function first.
pub fn function_strategies() -> Vec<Box<dyn FunctionStrategy>> {
    vec![Box::new(ArctanRatio), Box::new(ScaledSine)]
}

/// Looks up a function by its display name.
pub fn find_function(name: &str) -> Option<Box<dyn FunctionStrategy>> {
    function_strategies().into_iter().find(|f| f.name() == name)
}
