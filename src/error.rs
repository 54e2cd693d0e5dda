pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl Error {
    /// Classifies the error into one of the coarse kinds reported by checked
    /// access and shape mutation.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Index(e) => e.kind(),
            Self::Shape(e) => e.kind(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    LengthMismatch,
    OutOfRange,
    InvalidArgument,
    Overflow,
    TooManyIndices,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum IndexError {
    #[error("wrong number of indices: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("index {index} is out of bounds for axis {axis} with size {extent}")]
    OutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },
    #[error("too many indices for array: array is {rank}-dimensional, but {found} were indexed")]
    TooManyIndices { rank: usize, found: usize },
    #[error("offset {offset} is past the end of storage holding {len} elements")]
    Unallocated { offset: usize, len: usize },
}

impl IndexError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::OutOfRange { .. } | Self::Unallocated { .. } => ErrorKind::OutOfRange,
            Self::TooManyIndices { .. } => ErrorKind::TooManyIndices,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("extent of axis {axis} is zero")]
    ZeroExtent { axis: usize },
    #[error("total element count exceeds the size type")]
    Overflow,
    #[error("priority value {value} is out of range for rank {rank}")]
    PriorityOutOfRange { value: usize, rank: usize },
    #[error("priorities are not a permutation of the axes")]
    NotAPermutation,
}

impl ShapeError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroExtent { .. } | Self::PriorityOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Overflow => ErrorKind::Overflow,
            Self::NotAPermutation => ErrorKind::InvalidArgument,
        }
    }
}
