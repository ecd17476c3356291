// ABOUTME: Composite component node with owning children and weak parent links.
// ABOUTME: Supports child insertion, removal, reordering, and index navigation.

use std::cell::{Cell, RefCell};
use std::ptr;
use std::rc::{Rc, Weak};

use crate::kind::{Kind, Role};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Leaf components cannot hold children")]
    NotAContainer,

    #[error("Adding this component would make it its own ancestor")]
    WouldCycle,

    #[error("A window is a root and cannot be placed inside a container")]
    RootNotEmbeddable,

    #[error("Component already belongs to another container")]
    AttachedElsewhere,

    #[error("Component has no parent container")]
    NoParent,

    #[error("Index {index} is out of range for a container with {len} children")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A node in the component tree.
///
/// Nodes are shared through `Rc`. A container owns its children; a child only
/// keeps a `Weak` link back to its container. `Rc` and `RefCell` make the tree
/// single-threaded: share it across threads only behind external locking and
/// a different handle type.
#[derive(Debug)]
pub struct Component {
    name: String,
    kind: Kind,
    visible: Cell<bool>,
    parent: RefCell<Weak<Component>>,
    children: RefCell<Vec<Rc<Component>>>,
}

impl Component {
    pub fn new(kind: Kind, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            kind,
            visible: Cell::new(true),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        })
    }

    pub fn container(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Container, name)
    }

    pub fn window(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Window, name)
    }

    pub fn panel(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Panel, name)
    }

    pub fn label(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Label, name)
    }

    pub fn list(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::List, name)
    }

    pub fn button(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Button, name)
    }

    pub fn line(name: impl Into<String>) -> Rc<Self> {
        Self::new(Kind::Line, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Snapshot of the child handles in index order
    pub fn children(&self) -> Vec<Rc<Component>> {
        self.children.borrow().clone()
    }

    /// Child at `index`, or `None` for leaves and out-of-range indices
    pub fn get_child(&self, index: usize) -> Option<Rc<Component>> {
        match self.kind.role() {
            Role::Leaf => None,
            Role::Container | Role::Root => self.children.borrow().get(index).cloned(),
        }
    }

    /// The containing component. Windows always report `None`.
    pub fn get_parent(&self) -> Option<Rc<Component>> {
        match self.kind.role() {
            Role::Root => None,
            Role::Leaf | Role::Container => self.parent_link(),
        }
    }

    /// Rebind the back-reference to the containing component.
    ///
    /// Does not check for cycles or update any child list. `add` and
    /// `remove_child` call this; other callers must keep the tree consistent
    /// themselves.
    pub fn set_parent(&self, parent: Option<&Rc<Component>>) {
        *self.parent.borrow_mut() = parent.map(Rc::downgrade).unwrap_or_default();
    }

    /// The `index`-th child of this component's parent, which may be `self`
    pub fn get_sibling(&self, index: usize) -> Option<Rc<Component>> {
        self.get_parent()?.get_child(index)
    }

    /// Position of this component in its parent's child list.
    /// When the component occupies several slots, the first one wins.
    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.get_parent()?;
        let children = parent.children.borrow();
        children.iter().position(|c| ptr::eq(c.as_ref(), self))
    }

    /// Whether `self` appears on the parent chain of `other`
    pub fn is_ancestor_of(&self, other: &Component) -> bool {
        let mut current = other.parent_link();
        while let Some(node) = current {
            if ptr::eq(node.as_ref(), self) {
                return true;
            }
            current = node.parent_link();
        }
        false
    }

    /// Append `child` and point its parent link at this container.
    ///
    /// Adding the same child to the same container twice is allowed and
    /// gives it two index slots.
    pub fn add(self: &Rc<Self>, child: Rc<Component>) -> Result<(), TreeError> {
        let result = self.check_add(&child);
        if let Err(e) = &result {
            tracing::warn!("Rejected adding {:?} to {:?}: {}", child.name, self.name, e);
            return result;
        }

        let index = {
            let mut children = self.children.borrow_mut();
            children.push(Rc::clone(&child));
            children.len() - 1
        };
        child.set_parent(Some(self));

        tracing::debug!("Added {:?} to {:?} at index {}", child.name, self.name, index);
        Ok(())
    }

    fn check_add(&self, child: &Rc<Component>) -> Result<(), TreeError> {
        if !self.is_container() {
            return Err(TreeError::NotAContainer);
        }
        if child.kind.role() == Role::Root {
            return Err(TreeError::RootNotEmbeddable);
        }
        if ptr::eq(child.as_ref(), self) || child.is_ancestor_of(self) {
            return Err(TreeError::WouldCycle);
        }
        match child.parent_link() {
            Some(parent) if !ptr::eq(parent.as_ref(), self) => Err(TreeError::AttachedElsewhere),
            _ => Ok(()),
        }
    }

    /// Detach the child at `index`.
    ///
    /// The child's parent link is cleared unless it still occupies another
    /// slot of this container.
    pub fn remove_child(&self, index: usize) -> Option<Rc<Component>> {
        let removed = {
            let mut children = self.children.borrow_mut();
            if index >= children.len() {
                return None;
            }
            children.remove(index)
        };

        let still_held = self
            .children
            .borrow()
            .iter()
            .any(|c| Rc::ptr_eq(c, &removed));
        if !still_held {
            removed.set_parent(None);
        }

        tracing::debug!("Removed {:?} from {:?} at index {}", removed.name, self.name, index);
        Some(removed)
    }

    /// Move this component to `new_index` within its parent's child list.
    ///
    /// Children between the old and new positions shift by one. On error the
    /// tree is left unchanged.
    pub fn move_to(&self, new_index: usize) -> Result<(), TreeError> {
        let Some(parent) = self.get_parent() else {
            tracing::warn!("Cannot move {:?}: no parent container", self.name);
            return Err(TreeError::NoParent);
        };
        let mut children = parent.children.borrow_mut();

        let len = children.len();
        if new_index >= len {
            tracing::warn!("Cannot move {:?} to index {} (len {})", self.name, new_index, len);
            return Err(TreeError::IndexOutOfRange {
                index: new_index,
                len,
            });
        }

        let old_index = children
            .iter()
            .position(|c| ptr::eq(c.as_ref(), self))
            .ok_or(TreeError::NoParent)?;
        let node = children.remove(old_index);
        children.insert(new_index, node);

        tracing::debug!(
            "Moved {:?} in {:?} from index {} to {}",
            self.name,
            parent.name,
            old_index,
            new_index
        );
        Ok(())
    }

    fn parent_link(&self) -> Option<Rc<Component>> {
        self.parent.borrow().upgrade()
    }
}
