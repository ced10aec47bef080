// Drawing surface for the station map
pub mod renderer;
pub mod scene;

pub use renderer::SurfaceRenderer;
pub use scene::{EdgeId, NodeId, Surface, SurfaceMutation, VisualEdge, VisualLabel, VisualNode};
