// src/graph/window.rs

use log::info;

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::error::{DemoError, DemoResult};
use crate::graph::function_strategy::{function_strategies, FunctionStrategy};
use crate::graph::renderer::{GraphRenderer, Scene};

type RedrawListener = Box<dyn FnMut(&Scene)>;

/// Window model: a function selector plus a draw surface.
///
/// Changing the selection or the surface size redraws synchronously and
/// hands the fresh scene to the redraw listener, if one is set.
pub struct GraphWindow {
    renderer: GraphRenderer,
    functions: Vec<Box<dyn FunctionStrategy>>,
    selected: usize,
    width: u32,
    height: u32,
    on_redraw: Option<RedrawListener>,
}

impl GraphWindow {
    /// Builds a window over `functions`, selecting the first entry.
    ///
    /// Fails with [`DemoError::InvalidArgument`] if the list is empty.
    pub fn new(
        renderer: GraphRenderer,
        functions: Vec<Box<dyn FunctionStrategy>>,
    ) -> DemoResult<Self> {
        if functions.is_empty() {
            return Err(DemoError::InvalidArgument("functions"));
        }
        Ok(Self {
            renderer,
            functions,
            selected: 0,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            on_redraw: None,
        })
    }

    /// Display names in selector order.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.name())
    }

    pub fn selected(&self) -> &dyn FunctionStrategy {
        self.functions[self.selected].as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn on_redraw<F>(&mut self, listener: F)
    where
        F: FnMut(&Scene) + 'static,
    {
        self.on_redraw = Some(Box::new(listener));
    }

    /// Switches to the function with display name `name` and redraws.
    pub fn select(&mut self, name: &str) -> DemoResult<Scene> {
        let index = self
            .functions
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| DemoError::UnknownFunction(name.to_string()))?;
        info!("Selected function '{name}'");
        self.selected = index;
        Ok(self.redraw())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Scene {
        info!("Resized draw surface to {width}x{height}");
        self.width = width;
        self.height = height;
        self.redraw()
    }

    pub fn redraw(&mut self) -> Scene {
        let scene = self
            .renderer
            .render(self.selected(), self.width, self.height);
        if let Some(listener) = self.on_redraw.as_mut() {
            listener(&scene);
        }
        scene
    }
}

impl Default for GraphWindow {
    fn default() -> Self {
        Self {
            renderer: GraphRenderer::default(),
            functions: function_strategies(),
            selected: 0,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            on_redraw: None,
        }
    }
}
