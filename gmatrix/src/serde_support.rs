//! serde support for `Matrix<T>`
//!
//! A matrix serializes as `{ rows, cols, cells }` with row-major cells.
//! Deserialization goes through the checked constructor, so a payload that
//! breaks dimension parity or the cell count is rejected.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Matrix;

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("cells", &self.cells)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        Matrix::from_vec(raw.rows, raw.cols, raw.cells).map_err(D::Error::custom)
    }
}
