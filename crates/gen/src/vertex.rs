use std::fmt::{Debug, Display};

use rand::distributions::uniform::SampleUniform;

/// An integer type that can identify a vertex of a generated graph.
///
/// Spans between two identifiers are computed on the `i128` widening of the
/// values, which is lossless for every implementor.
pub trait VertexId:
    Copy + Ord + Debug + Display + SampleUniform + Send + Sync + Sized + 'static
{
    fn as_i128(self) -> i128;

    /// Returns `high - low` without overflow. Requires `low <= high`.
    #[inline]
    fn distance(low: Self, high: Self) -> u128 {
        debug_assert!(low <= high);
        high.as_i128().abs_diff(low.as_i128())
    }
}

macro_rules! impl_vertex_id {
    ($($TYPE:ty),* $(,)?) => {
        $(
            impl VertexId for $TYPE {
                #[inline]
                fn as_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_vertex_id!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_signed_range() {
        assert_eq!(i32::distance(-5, 5), 10);
        assert_eq!(i8::distance(i8::MIN, i8::MAX), 255);
    }

    #[test]
    fn distance_does_not_overflow() {
        assert_eq!(u64::distance(0, u64::MAX), u64::MAX as u128);
        assert_eq!(
            i64::distance(i64::MIN, i64::MAX),
            (i64::MAX as i128 - i64::MIN as i128) as u128
        );
    }
}
