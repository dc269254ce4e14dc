pub mod app;
pub mod assets;
pub mod bodies;
pub mod ring;
pub mod sim;

pub use app::SolarSystemApp;
pub use assets::SceneAssets;
pub use bodies::{MoonConfig, PlanetConfig, RenderStyle, SystemConfig};
pub use sim::SimState;
