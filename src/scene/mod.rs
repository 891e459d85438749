// ============================================================================
// SCENE MODULE - AR station view
// ============================================================================
// state    -> zoom / rotation / selection
// builder  -> pure SceneState -> Vec<DrawCommand>
// canvas   -> runs the commands against the browser 2D context
// ============================================================================

pub mod state;
pub mod commands;
pub mod builder;
pub mod canvas;

pub use state::{clamp_zoom, ArPhase, SceneState};
pub use commands::{DrawCommand, Point, Segment};
pub use builder::build_scene;
