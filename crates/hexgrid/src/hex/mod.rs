mod hex_coord;
pub use self::hex_coord::*;
mod hex_direction;
pub use self::hex_direction::*;
mod hex_spiral;
pub use self::hex_spiral::*;

mod hex_grid_config;
pub use self::hex_grid_config::*;
mod hex_grid_error;
pub use self::hex_grid_error::*;
mod hex_grid;
pub use self::hex_grid::*;
