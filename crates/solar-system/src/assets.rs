//! Presentation-layer resources for the scene.
//!
//! Acquired once at startup, released once at shutdown. A missing texture
//! is a warning, never a failure: the affected body falls back to a flat
//! colored sphere and the frame loop keeps running.

use log::warn;
use orrery_engine::{ModelHandle, Presenter, TextureHandle};

use crate::bodies::{RenderStyle, SystemConfig};

/// Mesh resolution for generated sphere models.
const SPHERE_RINGS: u32 = 32;
const SPHERE_SLICES: u32 = 32;

/// Handles for every texture and model in the scene. Models read their
/// bound texture but do not own it, so release order matters: models
/// first, then textures.
#[derive(Debug)]
pub struct SceneAssets {
    pub background: TextureHandle,
    pub sun_texture: TextureHandle,
    pub moon_texture: TextureHandle,
    pub planet_textures: Vec<TextureHandle>,
    pub sun_model: ModelHandle,
    pub moon_model: ModelHandle,
    pub planet_models: Vec<ModelHandle>,
}

impl SceneAssets {
    /// Placeholder with no resources; every body renders flat.
    pub fn empty(planet_count: usize) -> Self {
        Self {
            background: TextureHandle::INVALID,
            sun_texture: TextureHandle::INVALID,
            moon_texture: TextureHandle::INVALID,
            planet_textures: vec![TextureHandle::INVALID; planet_count],
            sun_model: ModelHandle::INVALID,
            moon_model: ModelHandle::INVALID,
            planet_models: vec![ModelHandle::INVALID; planet_count],
        }
    }

    /// Load every texture and model the render style needs.
    pub fn load(presenter: &mut dyn Presenter, config: &SystemConfig) -> Self {
        let mut assets = Self::empty(config.planets.len());
        if config.render_style == RenderStyle::FlatSphere {
            return assets;
        }

        assets.sun_texture = load_texture_logged(presenter, &config.sun_texture);
        assets.moon_texture = load_texture_logged(presenter, &config.moon.texture);
        for (i, planet) in config.planets.iter().enumerate() {
            assets.planet_textures[i] = load_texture_logged(presenter, &planet.texture);
            if !assets.planet_textures[i].is_valid() {
                warn!("{} will render as a flat sphere", planet.name);
            }
        }

        // Models only for bodies whose texture arrived; the rest stay flat.
        if assets.sun_texture.is_valid() {
            assets.sun_model =
                presenter.load_sphere_model(config.sun_size, SPHERE_RINGS, SPHERE_SLICES);
            presenter.set_model_texture(assets.sun_model, assets.sun_texture);
        }
        for (i, planet) in config.planets.iter().enumerate() {
            if assets.planet_textures[i].is_valid() {
                assets.planet_models[i] =
                    presenter.load_sphere_model(planet.visual_size, SPHERE_RINGS, SPHERE_SLICES);
                presenter.set_model_texture(assets.planet_models[i], assets.planet_textures[i]);
            }
        }
        if assets.moon_texture.is_valid() {
            assets.moon_model =
                presenter.load_sphere_model(config.moon.visual_size, SPHERE_RINGS, SPHERE_SLICES);
            presenter.set_model_texture(assets.moon_model, assets.moon_texture);
        }

        assets.background = load_texture_logged(presenter, &config.background_texture);
        assets
    }

    /// Release everything: models before the textures they read.
    pub fn unload(&mut self, presenter: &mut dyn Presenter) {
        if self.sun_model.is_valid() {
            presenter.unload_model(self.sun_model);
            self.sun_model = ModelHandle::INVALID;
        }
        if self.moon_model.is_valid() {
            presenter.unload_model(self.moon_model);
            self.moon_model = ModelHandle::INVALID;
        }
        for model in std::mem::take(&mut self.planet_models) {
            if model.is_valid() {
                presenter.unload_model(model);
            }
        }

        if self.sun_texture.is_valid() {
            presenter.unload_texture(self.sun_texture);
            self.sun_texture = TextureHandle::INVALID;
        }
        if self.moon_texture.is_valid() {
            presenter.unload_texture(self.moon_texture);
            self.moon_texture = TextureHandle::INVALID;
        }
        for texture in std::mem::take(&mut self.planet_textures) {
            if texture.is_valid() {
                presenter.unload_texture(texture);
            }
        }
        if self.background.is_valid() {
            presenter.unload_texture(self.background);
            self.background = TextureHandle::INVALID;
        }
    }
}

fn load_texture_logged(presenter: &mut dyn Presenter, path: &str) -> TextureHandle {
    let texture = presenter.load_texture(path);
    if !texture.is_valid() {
        warn!("failed to load texture {path}");
    }
    texture
}
