// ABOUTME: Built-in sample tree the navigator starts from.
// ABOUTME: A main window holding two panels, each with a label and a button.

use std::rc::Rc;

use cnav_tree::{Component, TreeError};

pub fn build_demo_tree() -> Result<Rc<Component>, TreeError> {
    let main_window = Component::window("Main Window");

    for n in 1..=2 {
        let panel = Component::panel(format!("Panel {n}"));
        main_window.add(panel.clone())?;
        panel.add(Component::label(format!("Label {n}")))?;
        panel.add(Component::button(format!("Button {n}")))?;
    }

    Ok(main_window)
}
