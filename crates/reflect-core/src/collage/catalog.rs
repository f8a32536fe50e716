use super::errors::CollageError;
use super::types::ImageRef;

/// Static, ordered list of candidate images offered by the picker.
///
/// Supplied at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageRef>,
}

impl Catalog {
    /// Build a catalog from raw references.
    ///
    /// # Errors
    ///
    /// Fails on an empty list or a blank entry.
    pub fn new<I, S>(images: I) -> Result<Self, CollageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images = images
            .into_iter()
            .map(ImageRef::new)
            .collect::<Result<Vec<_>, _>>()?;

        if images.is_empty() {
            return Err(CollageError::EmptyCatalog);
        }

        Ok(Self { images })
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn get(&self, position: usize) -> Result<&ImageRef, CollageError> {
        self.images
            .get(position)
            .ok_or(CollageError::CatalogIndexOutOfRange {
                index: position,
                len: self.images.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Human label for an image: the `text=` query value of placeholder URLs,
    /// otherwise the last path segment.
    pub fn label(image: &ImageRef) -> &str {
        let raw = image.as_str();
        if let Some((_, query)) = raw.split_once('?')
            && let Some(text) = query
                .split('&')
                .find_map(|pair| pair.strip_prefix("text="))
                .filter(|text| !text.is_empty())
        {
            return text;
        }
        let path = raw.split('?').next().unwrap_or(raw);
        path.rsplit('/').find(|segment| !segment.is_empty()).unwrap_or(raw)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            images: crate::config::defaults::DEFAULT_CATALOG_IMAGES
                .iter()
                .filter_map(|image| ImageRef::new(*image).ok())
                .collect(),
        }
    }
}
