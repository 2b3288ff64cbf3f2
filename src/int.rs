use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// A signed integer type used for flows, capacities and costs alike.
///
/// Costs of residual edges are the negation of their forward edge, so the type has to be signed.
pub trait Int:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + Hash
    + AddAssign
    + SubAssign
    + Zero
    + One
    + ToPrimitive
    + FromPrimitive
    + Debug
    + Display
    + Default
{
}

impl Int for i32 {}

impl Int for i64 {}

impl Int for isize {}
