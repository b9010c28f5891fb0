//! # Raw Observations
//!
//! Grid-world environments report a partial view of the grid as a
//! ``[height][width][channels]`` integer array (``7 x 7 x 3`` for the
//! default view), plus a natural language mission.

use serde::{Deserialize, Serialize};

use crate::errors::{GLResult, GridlingoError};

/// Nested ``[height][width][channels]`` grid, as it appears in JSON.
pub type NestedGrid = Vec<Vec<Vec<u8>>>;

/// A dense, row-major ``[height, width, channels]`` grid payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NestedGrid", into = "NestedGrid")]
pub struct GridImage {
    dims: [usize; 3],
    values: Vec<u8>,
}

impl GridImage {
    /// Build a grid from its dims and row-major values.
    ///
    /// ## Errors
    /// [`GridlingoError::InvalidGrid`] if ``values.len()`` is not the product of `dims`.
    pub fn new(
        dims: [usize; 3],
        values: Vec<u8>,
    ) -> GLResult<Self> {
        let expected: usize = dims.iter().product();
        if values.len() != expected {
            return Err(GridlingoError::InvalidGrid(format!(
                "dims {dims:?} require {expected} values, found {}",
                values.len()
            )));
        }
        Ok(Self { dims, values })
    }

    /// A grid of zeros.
    pub fn zeros(dims: [usize; 3]) -> Self {
        Self {
            dims,
            values: vec![0; dims.iter().product()],
        }
    }

    /// Build a grid from nested rows; every row and cell must agree in length.
    pub fn from_nested(grid: NestedGrid) -> GLResult<Self> {
        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);
        let channels = grid
            .first()
            .and_then(|row| row.first())
            .map_or(0, Vec::len);

        let mut values = Vec::with_capacity(height * width * channels);
        for (r, row) in grid.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridlingoError::InvalidGrid(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (c, cell) in row.into_iter().enumerate() {
                if cell.len() != channels {
                    return Err(GridlingoError::InvalidGrid(format!(
                        "cell ({r}, {c}) has {} channels, expected {channels}",
                        cell.len()
                    )));
                }
                values.extend(cell);
            }
        }

        Ok(Self {
            dims: [height, width, channels],
            values,
        })
    }

    /// Convert back into nested rows.
    pub fn to_nested(&self) -> NestedGrid {
        let [height, width, channels] = self.dims;
        if width == 0 || channels == 0 {
            return vec![vec![Vec::new(); width]; height];
        }
        self.values
            .chunks(width * channels)
            .map(|row| row.chunks(channels).map(<[u8]>::to_vec).collect())
            .collect()
    }

    /// The ``[height, width, channels]`` dims.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The row-major values.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the grid empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at ``(row, col, channel)``.
    pub fn get(
        &self,
        row: usize,
        col: usize,
        channel: usize,
    ) -> Option<u8> {
        let [height, width, channels] = self.dims;
        if row >= height || col >= width || channel >= channels {
            return None;
        }
        self.values
            .get((row * width + col) * channels + channel)
            .copied()
    }

    /// Iterate the values, row-major, as `f32`.
    pub fn flatten(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().map(|&v| f32::from(v))
    }
}

impl TryFrom<NestedGrid> for GridImage {
    type Error = GridlingoError;

    fn try_from(grid: NestedGrid) -> Result<Self, Self::Error> {
        Self::from_nested(grid)
    }
}

impl From<GridImage> for NestedGrid {
    fn from(image: GridImage) -> Self {
        image.to_nested()
    }
}

/// A raw environment observation.
///
/// Unknown fields (such as the agent ``direction``) are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The grid payload.
    pub image: GridImage,

    /// The mission text.
    pub mission: String,
}

impl Observation {
    /// Build an observation.
    pub fn new<S: Into<String>>(
        image: GridImage,
        mission: S,
    ) -> Self {
        Self {
            image,
            mission: mission.into(),
        }
    }
}
