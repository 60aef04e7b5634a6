//! Image inputs of a submission and the five-image cap.

use serde::{Deserialize, Serialize};

/// Most images a single submission may carry.
pub const MAX_IMAGES: usize = 5;

/// Name of the multipart field every image is sent under.
pub const IMAGE_FIELD: &str = "images";

/// An image payload independent of where it was read from.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Result of offering a batch of images to an [`ImageSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

impl AddOutcome {
    pub fn hit_limit(&self) -> bool {
        self.rejected > 0
    }
}

/// Ordered collection holding at most [`MAX_IMAGES`] items.
///
/// Used with file handles by the prompt form and with [`ImageUpload`]s by the
/// submission, so the cap is enforced the same way in both places.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet<T> {
    items: Vec<T>,
}

impl<T> Default for ImageSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ImageSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one image, handing it back when the set is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Keeps the first `remaining()` images of the batch and drops the rest.
    pub fn add_all(&mut self, incoming: impl IntoIterator<Item = T>) -> AddOutcome {
        let mut outcome = AddOutcome::default();
        for item in incoming {
            match self.push(item) {
                Ok(()) => outcome.accepted += 1,
                Err(_) => outcome.rejected += 1,
            }
        }
        outcome
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn remaining(&self) -> usize {
        MAX_IMAGES - self.items.len()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_IMAGES
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_is_truncated_to_the_remaining_slots() {
        let mut set = ImageSet::new();
        set.add_all(["a", "b", "c"]);
        let outcome = set.add_all(["d", "e", "f", "g"]);
        assert_eq!(outcome, AddOutcome { accepted: 2, rejected: 2 });
        assert!(outcome.hit_limit());
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn sixth_image_is_handed_back() {
        let mut set = ImageSet::new();
        for i in 0..MAX_IMAGES {
            assert!(set.push(i).is_ok());
        }
        assert_eq!(set.push(5), Err(5));
        assert_eq!(set.len(), MAX_IMAGES);
    }

    #[test]
    fn removing_frees_a_slot() {
        let mut set = ImageSet::new();
        set.add_all(0..5);
        assert_eq!(set.remove(1), Some(1));
        assert_eq!(set.remove(10), None);
        assert_eq!(set.remaining(), 1);
        assert!(set.push(9).is_ok());
    }
}
