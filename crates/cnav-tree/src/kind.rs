// ABOUTME: Component kinds and the navigation role each kind plays.
// ABOUTME: Leaves never hold children; windows are roots with no parent or siblings.

/// Concrete component variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Generic container
    Container,
    /// Top-level container, always a root
    Window,
    /// Container embedded inside another container
    Panel,
    Label,
    List,
    Button,
    Line,
}

/// How a kind resolves children, parent, and siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Leaf,
    Container,
    Root,
}

impl Kind {
    pub fn role(&self) -> Role {
        match self {
            Kind::Window => Role::Root,
            Kind::Container | Kind::Panel => Role::Container,
            Kind::Label | Kind::List | Kind::Button | Kind::Line => Role::Leaf,
        }
    }

    pub fn is_container(&self) -> bool {
        self.role() != Role::Leaf
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Container => "Container",
            Kind::Window => "Window",
            Kind::Panel => "Panel",
            Kind::Label => "Label",
            Kind::List => "List",
            Kind::Button => "Button",
            Kind::Line => "Line",
        }
    }

    /// Label used when kind-specific labels are turned off
    pub fn generic_label(&self) -> &'static str {
        if self.is_container() {
            "Container"
        } else {
            "Component"
        }
    }
}
