use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bidiscroll::{Cell, CorrectorOptions};
use thiserror::Error;

use crate::{BidirectionalScrollView, SimulatedSurface};

pub const SCROLL_VIEW: &str = "DoubleSidedScrollView";
pub const CELL_CONTAINER: &str = "CellContainer";

/// A component instance handed to the host rendering tree.
#[derive(Clone, Debug)]
pub enum Component {
    ScrollView(Box<BidirectionalScrollView<SimulatedSurface>>),
    Cell(Cell),
}

impl Component {
    pub fn as_scroll_view(&self) -> Option<&BidirectionalScrollView<SimulatedSurface>> {
        match self {
            Self::ScrollView(v) => Some(v),
            Self::Cell(_) => None,
        }
    }

    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            Self::Cell(c) => Some(c),
            Self::ScrollView(_) => None,
        }
    }
}

/// Builds a fresh component instance.
pub type ComponentFactory = Arc<dyn Fn() -> Component + Send + Sync>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no component registered as `{0}`")]
    UnknownComponent(String),
    #[error("a component is already registered as `{0}`")]
    AlreadyRegistered(String),
}

/// Maps component names to factories.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the scroll view and the cell container registered.
    pub fn with_defaults(options: CorrectorOptions) -> Self {
        let mut r = Self::new();
        r.factories.insert(
            SCROLL_VIEW.to_owned(),
            Arc::new(move || {
                Component::ScrollView(Box::new(BidirectionalScrollView::new(
                    SimulatedSurface::default(),
                    options,
                )))
            }),
        );
        r.factories.insert(
            CELL_CONTAINER.to_owned(),
            Arc::new(|| Component::Cell(Cell::default())),
        );
        r
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Component + Send + Sync + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        atrace!(name = %name, "ComponentRegistry::register");
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn create(&self, name: &str) -> Result<Component, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_owned()))?;
        Ok(factory())
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.names())
            .finish()
    }
}
