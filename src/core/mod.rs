pub mod scale;
pub mod table;
pub mod types;

pub use scale::{BandScale, LinearScale};
pub use table::{CellValue, ColumnRole, DataColumn, DataTable};
pub use types::{Color, Viewport};
