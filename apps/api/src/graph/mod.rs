// Skill graph: node/edge projection for the visualization surface.

pub mod handlers;
pub mod projector;
