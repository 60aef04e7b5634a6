use crate::model::generation::GenerationOptions;
use crate::model::image::{ImageSet, ImageUpload, IMAGE_FIELD};

use super::WorkflowError;

/// Everything sent with one generation request.
///
/// Images are held in an [`ImageSet`], so a submission can never carry more
/// than five of them; the sixth is refused by [`Submission::add_image`] long
/// before anything touches the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    prompt: Option<String>,
    images: ImageSet<ImageUpload>,
    options: GenerationOptions,
}

impl Submission {
    /// Blank prompts are dropped rather than sent as an empty field.
    pub fn new(prompt: impl Into<String>, options: GenerationOptions) -> Self {
        let prompt = prompt.into();
        let trimmed = prompt.trim();
        Self {
            prompt: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            images: ImageSet::new(),
            options,
        }
    }

    pub fn add_image(&mut self, image: ImageUpload) -> Result<(), WorkflowError> {
        self.images
            .push(image)
            .map_err(|_| WorkflowError::TooManyImages)
    }

    pub fn with_images(
        mut self,
        images: impl IntoIterator<Item = ImageUpload>,
    ) -> Result<Self, WorkflowError> {
        for image in images {
            self.add_image(image)?;
        }
        Ok(self)
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageUpload> {
        self.images.iter()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// True when neither a prompt nor an image is present. The remote service
    /// rejects such requests; the UI uses this to disable its submit button.
    pub fn is_empty(&self) -> bool {
        self.prompt.is_none() && self.images.is_empty()
    }

    /// Text parts of the multipart body: the prompt, when present, followed
    /// by the option fields.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(prompt) = &self.prompt {
            fields.push(("prompt", prompt.clone()));
        }
        fields.extend(self.options.form_fields());
        fields
    }

    /// Multipart field name for the file parts.
    pub fn image_field(&self) -> &'static str {
        IMAGE_FIELD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::image::MAX_IMAGES;

    fn image(n: usize) -> ImageUpload {
        ImageUpload {
            file_name: format!("view-{n}.png"),
            content_type: "image/png".into(),
            bytes: vec![n as u8; 4],
        }
    }

    #[test]
    fn sixth_image_is_rejected() {
        let mut submission = Submission::new("a chair", GenerationOptions::default());
        for n in 0..MAX_IMAGES {
            submission.add_image(image(n)).unwrap();
        }
        assert_eq!(submission.add_image(image(5)), Err(WorkflowError::TooManyImages));
        assert_eq!(submission.image_count(), MAX_IMAGES);
        assert!(submission.images().all(|img| img.file_name != "view-5.png"));
    }

    #[test]
    fn with_images_fails_on_overflow() {
        let result = Submission::new("", GenerationOptions::default()).with_images((0..6).map(image));
        assert_eq!(result, Err(WorkflowError::TooManyImages));
    }

    #[test]
    fn blank_prompt_is_omitted() {
        let submission = Submission::new("   ", GenerationOptions::default());
        assert_eq!(submission.prompt(), None);
        assert!(submission.is_empty());
        assert!(submission.text_fields().iter().all(|(k, _)| *k != "prompt"));
    }

    #[test]
    fn prompt_leads_the_text_fields() {
        let submission = Submission::new("  a red teapot ", GenerationOptions::default());
        let fields = submission.text_fields();
        assert_eq!(fields[0], ("prompt", "a red teapot".to_string()));
        assert!(!submission.is_empty());
    }
}
