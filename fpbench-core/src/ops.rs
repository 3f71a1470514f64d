//! Operation selection and dispatch
//!
//! The supported operations form a closed set. An operation name is
//! resolved once, before any measurement begins, into an [`Operation`]
//! value that hands out the two kernels under comparison: a native `f64`
//! kernel and an arbitrary-precision kernel. An unrecognized name is a
//! lookup failure, never a silent fall-through.

use std::fmt;
use std::str::FromStr;

use arpfloat::{Float, RoundingMode, Semantics};

use crate::error::HarnessError;

/// Working semantics of the arbitrary-precision engine
///
/// Binary128-shaped: 15 exponent bits, 113 significand bits,
/// round-to-nearest-even. Wide enough that every `f64` converts in and
/// back out bit-for-bit.
pub fn working_semantics() -> Semantics {
    Semantics::new(15, 113, RoundingMode::NearestTiesToEven)
}

/// Number of operands an operation consumes from the input pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Consumes only the x coordinate of a pool pair
    Unary,
    /// Consumes both coordinates of a pool pair
    Binary,
}

/// One of the measured arithmetic or transcendental operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// x + y
    Add,
    /// x - y
    Sub,
    /// x * y
    Mul,
    /// x / y
    Div,
    /// square root of x
    Sqrt,
    /// e^x
    Exp,
    /// x^y
    Pow,
    /// natural logarithm of x
    Log,
    /// sine of x
    Sin,
    /// cosine of x
    Cos,
    /// tangent of x
    Tan,
}

impl Operation {
    /// Every supported operation, in canonical order
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Sqrt,
        Self::Exp,
        Self::Pow,
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
    ];

    /// The command-line name of this operation
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Pow => "pow",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Whether this operation consumes one pool coordinate or both
    pub fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow => Arity::Binary,
            Self::Sqrt | Self::Exp | Self::Log | Self::Sin | Self::Cos | Self::Tan => Arity::Unary,
        }
    }

    /// The native fixed-precision kernel for this operation
    ///
    /// Unary kernels ignore the second operand so both arities share one
    /// signature and the timed loop stays identical across operations.
    pub fn native_kernel(self) -> fn(f64, f64) -> f64 {
        match self {
            Self::Add => |x, y| x + y,
            Self::Sub => |x, y| x - y,
            Self::Mul => |x, y| x * y,
            Self::Div => |x, y| x / y,
            Self::Sqrt => |x, _| x.sqrt(),
            Self::Exp => |x, _| x.exp(),
            Self::Pow => |x, y| x.powf(y),
            Self::Log => |x, _| x.ln(),
            Self::Sin => |x, _| x.sin(),
            Self::Cos => |x, _| x.cos(),
            Self::Tan => |x, _| x.tan(),
        }
    }

    /// Evaluate this operation on arbitrary-precision operands
    ///
    /// Runs at the working semantics with round-to-nearest-even. Tangent
    /// is sin/cos and power is exp(y ln x), both composed from the
    /// engine's primitive operations at full working precision.
    pub fn eval_arbitrary(self, x: &Float, y: &Float) -> Float {
        match self {
            Self::Add => x.clone() + y.clone(),
            Self::Sub => x.clone() - y.clone(),
            Self::Mul => x.clone() * y.clone(),
            Self::Div => x.clone() / y.clone(),
            Self::Sqrt => x.clone().sqrt(),
            Self::Exp => x.clone().exp(),
            Self::Pow => (y.clone() * x.clone().log()).exp(),
            Self::Log => x.clone().log(),
            Self::Sin => x.clone().sin(),
            Self::Cos => x.clone().cos(),
            Self::Tan => x.clone().sin() / x.clone().cos(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| HarnessError::UnknownOperation(s.to_string()))
    }
}
