//! Building blocks of the successive shortest path solver.
//!
//! [`potential`] seeds vertex potentials with a Bellman-Ford pass, [`dijkstra`] runs one
//! reweighted shortest path phase, [`augment`] pushes a unit of flow along the resulting tree and
//! [`mcmf`] drives the three. [`decompose`] turns the final flow back into paths.

pub mod augment;
pub mod decompose;
pub mod dijkstra;
pub mod mcmf;
pub mod potential;
pub mod tree;
