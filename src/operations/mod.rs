pub mod boolean;
pub mod occlusion;
pub mod project;

pub use occlusion::resolve;
pub use project::{orthoproject, project, project_brick, project_facet, scene_print};
