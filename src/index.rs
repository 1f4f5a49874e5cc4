use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::hash::Hash;
use std::marker::PhantomData;

/// A valid node index.
/// A missing node is expressed as `Option<NodeIndex>`, there is no reserved invalid value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct NodeIndex<IndexType: Sized>(IndexType);
/// A valid edge index.
/// A missing edge is expressed as `Option<EdgeIndex>`, there is no reserved invalid value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct EdgeIndex<IndexType: Sized>(IndexType);

/// A valid graph index.
pub trait GraphIndex:
    std::fmt::Debug + Eq + Ord + Hash + Copy + Sized + From<usize> + std::ops::Add<usize, Output = Self>
{
    // No `Into<usize>`, converting an index into a plain number should be explicit.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident) => {
        impl<IndexType: PrimInt + Hash> GraphIndex for $GraphIndexType<IndexType> {
            fn as_usize(self) -> usize {
                <usize as NumCast>::from(self.0).unwrap()
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $GraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_usize())
            }
        }

        impl<IndexType: PrimInt> From<usize> for $GraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                Self(<IndexType as NumCast>::from(source).unwrap())
            }
        }

        impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for $GraphIndexType<IndexType> {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self::from(self.as_usize() + rhs)
            }
        }
    };
}

impl_graph_index!(NodeIndex);
impl_graph_index!(EdgeIndex);

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: usize,
    end: usize,
    index_type: PhantomData<IndexType>,
}

impl<RawType: ToPrimitive, IndexType: GraphIndex> From<(RawType, RawType)>
    for GraphIndices<IndexType>
{
    /// Panics if the bounds are negative or do not fit into `usize`.
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: raw.0.to_usize().unwrap(),
            end: raw.1.to_usize().unwrap(),
            index_type: Default::default(),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = IndexType::from(self.start);
            self.start += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.start);
        (remaining, Some(remaining))
    }
}

impl<IndexType: GraphIndex> ExactSizeIterator for GraphIndices<IndexType> {}
