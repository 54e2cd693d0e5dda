#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[macro_use]
mod dimension;
pub use dimension::{Axis, Dimension, Peel, Scalar};

mod array;
pub use array::ArrayMd;

mod array_index;
pub use array_index::Indices;

mod error;
pub use error::{Error, ErrorKind, IndexError, Result, ShapeError};

mod multiarray;
pub use multiarray::{IndexedIter, Indexer, MultiArray};

mod order;
pub use order::{ColumnMajor, Order, RowMajor};

pub mod shape;

pub mod storage;
