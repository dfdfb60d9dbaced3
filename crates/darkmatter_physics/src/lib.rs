pub mod cosmology;
pub mod ensemble;
pub mod halo;
pub mod particle;
