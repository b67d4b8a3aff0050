pub mod foundation;

pub use foundation::{DaisyColor, DaisySize, class_list};
