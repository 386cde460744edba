pub mod csv;

pub use csv::{TableRow, render_csv};
