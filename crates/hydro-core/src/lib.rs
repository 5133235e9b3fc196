//! Engine-agnostic ship hydrodynamics and island terrain synthesis.
//!
//! The per-tick path clips a triangulated hull against a Gerstner wave
//! surface and computes buoyancy, viscous resistance, pressure drag and
//! slamming forces per submerged triangle; the host's rigid-body
//! integrator applies them. Terrain synthesis composes seeded multi-octave
//! noise with a radial falloff into island height fields at generation
//! time.

pub mod body;
pub mod config;
pub mod forces;
pub mod hull;
pub mod math;
pub mod mesh;
pub mod patch;
pub mod sim;
pub mod terrain;
pub mod waves;

pub use body::{AppliedForce, RigidBodyState};
pub use config::HydroConfig;
pub use hull::{HullTriangle, SlammingState};
pub use mesh::TriMesh;
pub use patch::WaterPatch;
pub use sim::HullHydrodynamics;
pub use waves::{WaveComponent, WaveField};
