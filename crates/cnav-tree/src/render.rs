// ABOUTME: Textual display of a component subtree.
// ABOUTME: One indented label per visible node; hidden containers hide their subtree.

use cnav_core::DisplaySettings;

use crate::component::Component;

impl Component {
    /// Render this component and its visible descendants, one line each
    pub fn render(&self, level: usize, settings: &DisplaySettings) -> String {
        let mut out = String::new();
        self.render_into(level, settings, &mut out);
        out
    }

    /// Print the subtree to stdout with default display settings
    pub fn display(&self, level: usize) {
        self.display_with(level, &DisplaySettings::default());
    }

    pub fn display_with(&self, level: usize, settings: &DisplaySettings) {
        print!("{}", self.render(level, settings));
    }

    fn render_into(&self, level: usize, settings: &DisplaySettings, out: &mut String) {
        if !self.is_visible() {
            return;
        }

        let label = if settings.kind_labels {
            self.kind().label()
        } else {
            self.kind().generic_label()
        };
        out.push_str(&settings.indent(level));
        out.push_str(label);
        out.push_str(": ");
        out.push_str(self.name());
        out.push('\n');

        // Leaves have no children, so this only recurses for containers
        for child in self.children() {
            child.render_into(level + 1, settings, out);
        }
    }
}
