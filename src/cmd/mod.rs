mod export;

pub use export::{export, export_bookmarks, Export};
