use crate::entities::Classification;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("The classifier is not available: {0}")]
    Unavailable(String),
    #[error("The classifier rejected the image: {0}")]
    Rejected(String),
    #[error("The classifier returned an unknown label '{0}'")]
    UnknownLabel(String),
}

/// Classifies images of waste into a waste category.
pub trait ClassificationGateway {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassificationError>;
}

impl<T: ClassificationGateway + ?Sized> ClassificationGateway for &T {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassificationError> {
        (**self).classify(image)
    }
}
