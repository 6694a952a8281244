pub mod alerts;
pub mod companion;
pub mod filter;
pub mod geometry;
pub mod palette;
pub mod placement;
pub mod viewport;
