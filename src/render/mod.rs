//! Presentation adapter
//!
//! Turns arena state into instance data. Window, camera and GPU setup belong
//! to the shell.

pub mod instance;
pub mod scene;

pub use instance::{QuadInstance, colors};
pub use scene::Scene;
