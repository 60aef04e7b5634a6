pub mod asset;
pub mod generation;
pub mod image;
pub mod material;
