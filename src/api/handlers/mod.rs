pub mod elements;
pub mod gardens;
pub mod palette;
pub mod placement;
pub mod plants;
pub mod weather;
