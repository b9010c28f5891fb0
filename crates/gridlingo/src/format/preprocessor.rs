//! # Observation Batch Preprocessor

use burn::tensor::{Tensor, TensorData, backend::Backend};
use parking_lot::{Mutex, MutexGuard};

use crate::{
    errors::{GLResult, GridlingoError},
    format::{EncodedBatch, Observation, tokenize},
    types::TokenIndex,
    vocab::BoundedVocabulary,
};

/// Encodes batches of [`Observation`]s into model input tensors.
///
/// Owns the model's [`BoundedVocabulary`]; novel mission tokens grow (and
/// persist) it as a side effect of encoding. The vocabulary lock is held for
/// the whole tokenize-and-lookup pass of a batch, so concurrent encoders
/// sharing a preprocessor never race for an index.
///
/// The instr one-hot width is ``vocab.capacity() + 1``: column `0` is the
/// reserved padding index, and is never set.
#[derive(Debug)]
pub struct ObssPreprocessor<B: Backend> {
    image_width: Option<usize>,
    instr_width: Option<usize>,
    vocab: Mutex<BoundedVocabulary>,

    /// Target of ``use_accelerated_compute``.
    device: B::Device,
}

impl<B: Backend> ObssPreprocessor<B> {
    /// Build a preprocessor over `vocab`.
    ///
    /// ## Arguments
    /// * `image_width` - the flattened image width; `None` to skip images.
    /// * `encode_instr` - whether to encode missions.
    /// * `vocab` - the mission vocabulary.
    pub fn new(
        image_width: Option<usize>,
        encode_instr: bool,
        vocab: BoundedVocabulary,
    ) -> Self {
        Self {
            image_width,
            instr_width: encode_instr.then(|| vocab.capacity() + 1),
            vocab: Mutex::new(vocab),
            device: Default::default(),
        }
    }

    /// Set the device tensors move to under ``use_accelerated_compute``.
    pub fn with_device(
        mut self,
        device: B::Device,
    ) -> Self {
        self.device = device;
        self
    }

    /// The accelerated compute device.
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// The flattened image width; `None` if images are not encoded.
    pub fn image_width(&self) -> Option<usize> {
        self.image_width
    }

    /// The one-hot mission width; `None` if missions are not encoded.
    pub fn instr_width(&self) -> Option<usize> {
        self.instr_width
    }

    /// Lock and borrow the vocabulary.
    pub fn vocab(&self) -> MutexGuard<'_, BoundedVocabulary> {
        self.vocab.lock()
    }

    /// Release the vocabulary.
    pub fn into_vocab(self) -> BoundedVocabulary {
        self.vocab.into_inner()
    }

    /// Tokenize each mission, and map its tokens through the vocabulary.
    ///
    /// Novel tokens are assigned (and persisted) in batch order. On
    /// [`GridlingoError::CapacityExceeded`], tokens assigned earlier in the
    /// batch remain assigned.
    pub fn tokenize_batch(
        &self,
        obss: &[Observation],
    ) -> GLResult<Vec<Vec<TokenIndex>>> {
        let mut vocab = self.vocab.lock();

        let mut instrs = Vec::with_capacity(obss.len());
        for obs in obss {
            let mut instr = Vec::new();
            for token in tokenize(&obs.mission) {
                instr.push(vocab.lookup(&token)?);
            }
            instrs.push(instr);
        }
        Ok(instrs)
    }

    /// Encode a batch of observations.
    ///
    /// ## Arguments
    /// * `obss` - a non-empty batch.
    /// * `use_accelerated_compute` - move the tensors to [`Self::device`].
    ///
    /// ## Errors
    /// * [`GridlingoError::EmptyBatch`] if `obss` is empty.
    /// * [`GridlingoError::ShapeMismatch`] if an image is not ``image_width`` long;
    ///   checked before any vocabulary change.
    /// * [`GridlingoError::CapacityExceeded`] if the missions hold more novel
    ///   tokens than the vocabulary has room for.
    pub fn encode(
        &self,
        obss: &[Observation],
        use_accelerated_compute: bool,
    ) -> GLResult<EncodedBatch<B>> {
        if obss.is_empty() {
            return Err(GridlingoError::EmptyBatch);
        }

        let host: B::Device = Default::default();

        let image = match self.image_width {
            Some(width) => Some(self.place(
                encode_images::<B>(obss, width, &host)?,
                use_accelerated_compute,
            )),
            None => None,
        };

        let instr = match self.instr_width {
            Some(width) => {
                let instrs = self.tokenize_batch(obss)?;
                Some(self.place(
                    encode_instrs::<B>(&instrs, width, &host),
                    use_accelerated_compute,
                ))
            }
            None => None,
        };

        let batch = EncodedBatch { image, instr };
        log::trace!(
            "encoded {} observations: image {:?}, instr {:?}",
            obss.len(),
            batch.image_dims(),
            batch.instr_dims()
        );
        Ok(batch)
    }

    /// Encode a single observation, as a batch of one.
    pub fn encode_one(
        &self,
        obs: &Observation,
        use_accelerated_compute: bool,
    ) -> GLResult<EncodedBatch<B>> {
        self.encode(std::slice::from_ref(obs), use_accelerated_compute)
    }

    fn place<const D: usize>(
        &self,
        tensor: Tensor<B, D>,
        use_accelerated_compute: bool,
    ) -> Tensor<B, D> {
        if use_accelerated_compute {
            tensor.to_device(&self.device)
        } else {
            tensor
        }
    }
}

/// Stack flattened images into ``[batch, width]``.
fn encode_images<B: Backend>(
    obss: &[Observation],
    width: usize,
    device: &B::Device,
) -> GLResult<Tensor<B, 2>> {
    let mut values = Vec::with_capacity(obss.len() * width);
    for (position, obs) in obss.iter().enumerate() {
        let actual = obs.image.len();
        if actual != width {
            return Err(GridlingoError::ShapeMismatch {
                position,
                expected: width,
                actual,
            });
        }
        values.extend(obs.image.flatten());
    }

    Ok(Tensor::from_data(
        TensorData::new(values, [obss.len(), width]),
        device,
    ))
}

/// One-hot encode index sequences into ``[max_len, batch, width]``.
///
/// Every index must be below `width`.
fn encode_instrs<B: Backend>(
    instrs: &[Vec<TokenIndex>],
    width: usize,
    device: &B::Device,
) -> Tensor<B, 3> {
    let batch = instrs.len();
    let max_len = instrs.iter().map(Vec::len).max().unwrap_or(0);

    let mut hot = vec![0.0f32; max_len * batch * width];
    for (i, instr) in instrs.iter().enumerate() {
        for (j, &index) in instr.iter().enumerate() {
            hot[(j * batch + i) * width + index] = 1.0;
        }
    }

    Tensor::from_data(TensorData::new(hot, [max_len, batch, width]), device)
}
