use crate::errors::ReflectError;

use super::types::SLOT_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollageError {
    #[error("Slot {index} is out of range: a collage has {count} slots")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("No image picker is open")]
    NoPickerOpen,

    #[error("Catalog position {index} is out of range: the catalog has {len} images")]
    CatalogIndexOutOfRange { index: usize, len: usize },

    #[error("Image reference cannot be empty")]
    EmptyImageRef,

    #[error("The image catalog cannot be empty")]
    EmptyCatalog,

    #[error("No async runtime is available to run the post")]
    NoAsyncRuntime,
}

impl CollageError {
    pub(crate) fn slot_out_of_range(index: usize) -> Self {
        CollageError::SlotOutOfRange {
            index,
            count: SLOT_COUNT,
        }
    }
}

impl ReflectError for CollageError {
    fn error_code(&self) -> &'static str {
        match self {
            CollageError::SlotOutOfRange { .. } => "SLOT_OUT_OF_RANGE",
            CollageError::NoPickerOpen => "NO_PICKER_OPEN",
            CollageError::CatalogIndexOutOfRange { .. } => "CATALOG_INDEX_OUT_OF_RANGE",
            CollageError::EmptyImageRef => "EMPTY_IMAGE_REF",
            CollageError::EmptyCatalog => "EMPTY_CATALOG",
            CollageError::NoAsyncRuntime => "NO_ASYNC_RUNTIME",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, CollageError::NoAsyncRuntime)
    }
}
