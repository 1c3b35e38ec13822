pub mod table_renderer;

pub use table_renderer::{Alignment, Table, TableColumn};
