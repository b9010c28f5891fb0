//! # Encoded Observation Batches

use burn::tensor::{Tensor, backend::Backend};

/// The tensors produced by [`ObssPreprocessor::encode`](super::ObssPreprocessor::encode).
///
/// Fields are `None` when disabled in the
/// [`ObssPreprocessorConfig`](super::ObssPreprocessorConfig).
#[derive(Debug, Clone)]
pub struct EncodedBatch<B: Backend> {
    /// Flattened images; ``[batch_size, image_width]``.
    pub image: Option<Tensor<B, 2>>,

    /// Time-major one-hot missions; ``[max_instr_len, batch_size, instr_width]``.
    ///
    /// Positions past the end of a shorter mission are all zero.
    pub instr: Option<Tensor<B, 3>>,
}

impl<B: Backend> EncodedBatch<B> {
    /// The number of observations in the batch, if any field is present.
    pub fn batch_size(&self) -> Option<usize> {
        match (&self.image, &self.instr) {
            (Some(image), _) => Some(image.dims()[0]),
            (None, Some(instr)) => Some(instr.dims()[1]),
            (None, None) => None,
        }
    }

    /// The ``[batch_size, image_width]`` dims of the image field.
    pub fn image_dims(&self) -> Option<[usize; 2]> {
        self.image.as_ref().map(|t| t.dims())
    }

    /// The ``[max_instr_len, batch_size, instr_width]`` dims of the instr field.
    pub fn instr_dims(&self) -> Option<[usize; 3]> {
        self.instr.as_ref().map(|t| t.dims())
    }
}
