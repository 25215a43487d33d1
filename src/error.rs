/// The error returned by index-taking list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The index is not in `[0, size)` for the list it was used on.
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

impl Error {
    /// Returns the offending index.
    #[inline]
    pub const fn index(&self) -> usize {
        match *self {
            Self::IndexOutOfRange { index, .. } => index,
        }
    }

    /// Returns the size of the list at the time of the failed access.
    #[inline]
    pub const fn size(&self) -> usize {
        match *self {
            Self::IndexOutOfRange { size, .. } => size,
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fails with [`Error::IndexOutOfRange`] unless `index < size`.
#[inline]
pub(crate) const fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, size })
    }
}
