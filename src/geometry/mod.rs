pub mod line;

pub use line::Line;
