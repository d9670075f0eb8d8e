use crate::hex::HexCoord;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum HexGridError {
    #[error("Invalid radius: {radius}, the radius of a grid cannot be negative")]
    InvalidArgument { radius: i32 },
    #[error("The referenced cell {coord} is out of bounds for a grid with radius: {radius}")]
    OutOfBounds { coord: HexCoord, radius: u32 },
}
