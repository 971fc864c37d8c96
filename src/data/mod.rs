pub mod csv_loader;

pub use csv_loader::{load_csv_path, load_csv_reader};
