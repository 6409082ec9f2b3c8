pub mod aptitude;
pub mod classifier;
