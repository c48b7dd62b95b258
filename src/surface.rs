//! External mount surfaces
//!
//! The dialog core mutates exactly two externally owned containers: the main
//! application surface (whose accessibility flag is toggled while a dialog is
//! up) and the overlay surface (which receives the dialog's mount node).
//! Surfaces are registered on a [`Stage`] by name and looked up at session
//! construction time; a missing surface is a construction error, never a
//! degraded mount.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Name of the main application surface.
pub const MAIN_SURFACE: &str = "app";

/// Name of the overlay surface that hosts mounted dialogs.
pub const OVERLAY_SURFACE: &str = "app-overlay";

/// Identifier for a node attached to a surface.
///
/// Ids are allocated per surface and never reused, so removing a node twice
/// is detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// A single externally owned container surface.
#[derive(Debug)]
pub struct SurfaceNode {
    name: String,
    aria_hidden: bool,
    children: Vec<NodeId>,
    next_node: u64,
}

impl SurfaceNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aria_hidden: false,
            children: Vec::new(),
            next_node: 0,
        }
    }

    /// Surface name as registered on the stage.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the surface is currently hidden from assistive technology.
    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    /// Toggle the accessibility flag.
    pub fn set_aria_hidden(&mut self, hidden: bool) {
        self.aria_hidden = hidden;
    }

    /// Create a fresh child node and attach it to this surface.
    pub fn append_child(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.children.push(id);
        id
    }

    /// Detach a child node. Returns `false` if the node was not attached,
    /// which callers treat as a double-removal bug.
    pub fn remove_child(&mut self, id: NodeId) -> bool {
        if let Some(index) = self.children.iter().position(|child| *child == id) {
            self.children.remove(index);
            true
        } else {
            false
        }
    }

    /// Whether the given node is currently attached.
    pub fn contains(&self, id: NodeId) -> bool {
        self.children.contains(&id)
    }

    /// Number of attached child nodes.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Shared handle to a surface.
///
/// The whole dialog system runs on the UI's cooperative event loop, so
/// single-threaded shared ownership is sufficient.
pub type SurfaceHandle = Rc<RefCell<SurfaceNode>>;

/// Registry of named surfaces, the stand-in for the host document.
#[derive(Debug, Default)]
pub struct Stage {
    surfaces: HashMap<String, SurfaceHandle>,
}

impl Stage {
    /// Create an empty stage with no surfaces registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stage with the two standard application surfaces registered.
    pub fn with_app_surfaces() -> Self {
        let mut stage = Self::new();
        stage.register(MAIN_SURFACE);
        stage.register(OVERLAY_SURFACE);
        stage
    }

    /// Register a surface under the given name, returning its handle.
    pub fn register(&mut self, name: impl Into<String>) -> SurfaceHandle {
        let name = name.into();
        let handle: SurfaceHandle = Rc::new(RefCell::new(SurfaceNode::new(name.clone())));
        self.surfaces.insert(name, Rc::clone(&handle));
        handle
    }

    /// Look up a surface by name.
    pub fn surface(&self, name: &str) -> Option<SurfaceHandle> {
        self.surfaces.get(name).map(Rc::clone)
    }
}
