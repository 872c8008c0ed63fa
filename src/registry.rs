//! Extension-keyed registry of scene loaders and savers

use crate::scene::SceneGraph;
use crate::stl::{LoaderStl, SaverStl, STL_EXT};
use crate::utils::Utils;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

pub trait Loader {
    /// Lower-case extension without the dot
    fn ext(&self) -> &str;
    fn load(&self, path: &Path) -> Result<SceneGraph>;
}

pub trait Saver {
    /// Lower-case extension without the dot
    fn ext(&self) -> &str;
    fn save(&self, path: &Path, scene: &SceneGraph) -> Result<()>;
}

impl Loader for LoaderStl {
    fn ext(&self) -> &str {
        STL_EXT
    }

    fn load(&self, path: &Path) -> Result<SceneGraph> {
        LoaderStl::load(path)
    }
}

impl Saver for SaverStl {
    fn ext(&self) -> &str {
        STL_EXT
    }

    fn save(&self, path: &Path, scene: &SceneGraph) -> Result<()> {
        SaverStl::save(path, scene)
    }
}

/// Loaders and savers keyed by file extension
#[derive(Default)]
pub struct FormatRegistry {
    loaders: HashMap<String, Box<dyn Loader + Send + Sync>>,
    savers: HashMap<String, Box<dyn Saver + Send + Sync>>,
}

impl FormatRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the STL loader and saver
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_loader(Box::new(LoaderStl));
        registry.register_saver(Box::new(SaverStl));
        registry
    }

    /// Register `loader`, replacing any loader for the same extension
    pub fn register_loader(&mut self, loader: Box<dyn Loader + Send + Sync>) {
        self.loaders.insert(loader.ext().to_lowercase(), loader);
    }

    /// Register `saver`, replacing any saver for the same extension
    pub fn register_saver(&mut self, saver: Box<dyn Saver + Send + Sync>) {
        self.savers.insert(saver.ext().to_lowercase(), saver);
    }

    pub fn can_load(&self, path: &Path) -> bool {
        self.loaders.contains_key(&Utils::extension(path))
    }

    pub fn can_save(&self, path: &Path) -> bool {
        self.savers.contains_key(&Utils::extension(path))
    }

    /// Load `path` with the loader registered for its extension
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<SceneGraph> {
        let path = path.as_ref();
        let ext = Utils::extension(path);
        let loader = self
            .loaders
            .get(&ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!("no loader for '.{}'", ext)))?;
        loader.load(path)
    }

    /// Save `scene` to `path` with the saver registered for its extension
    pub fn save<P: AsRef<Path>>(&self, path: P, scene: &SceneGraph) -> Result<()> {
        let path = path.as_ref();
        let ext = Utils::extension(path);
        let saver = self
            .savers
            .get(&ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!("no saver for '.{}'", ext)))?;
        saver.save(path, scene)
    }
}
