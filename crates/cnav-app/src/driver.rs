// ABOUTME: Interactive menu loop over the component tree.
// ABOUTME: Tracks the current component and applies child/sibling/parent/move commands.

use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use cnav_core::{Config, DisplaySettings, DriverSettings, MissPolicy};
use cnav_tree::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectChild,
    SelectSibling,
    SelectParent,
    Move,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::SelectChild),
            "2" => Some(MenuChoice::SelectSibling),
            "3" => Some(MenuChoice::SelectParent),
            "4" => Some(MenuChoice::Move),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nOptions:\n\
    1. Select a child component by index\n\
    2. Select a component from the same container\n\
    3. Select the parent component\n\
    4. Move the current component within its container\n\
    5. Exit\n\
    Enter your choice: ";

pub struct Driver<R, W> {
    input: R,
    output: W,
    /// Owns the tree so parent links stay live while "current" moves around
    root: Rc<Component>,
    current: Option<Rc<Component>>,
    display: DisplaySettings,
    settings: DriverSettings,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(root: Rc<Component>, config: &Config, input: R, output: W) -> Self {
        Self {
            input,
            output,
            current: Some(Rc::clone(&root)),
            root,
            display: config.display.clone(),
            settings: config.driver.clone(),
        }
    }

    pub fn current(&self) -> Option<&Rc<Component>> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the exit choice or end of input
    pub fn run(&mut self) -> Result<()> {
        if self.settings.show_tree_on_start {
            let tree = self.root.render(0, &self.display);
            write!(self.output, "Component tree:\n{tree}")?;
        }

        loop {
            self.print_current()?;
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("Input closed, exiting");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Some(choice) => self.handle(choice)?,
                None => writeln!(self.output, "Invalid choice. Please enter again.")?,
            }
        }

        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<()> {
        let Some(current) = self.current.clone() else {
            writeln!(self.output, "No component is selected.")?;
            return Ok(());
        };

        match choice {
            MenuChoice::SelectChild => {
                let index = self.prompt_index("Enter the index of the child component: ")?;
                let found = index.and_then(|i| current.get_child(i));
                self.navigate(&current, found, "child")?;
            }
            MenuChoice::SelectSibling => {
                let index = self.prompt_index("Enter the index of the sibling component: ")?;
                let found = index.and_then(|i| current.get_sibling(i));
                self.navigate(&current, found, "sibling")?;
            }
            MenuChoice::SelectParent => {
                let found = current.get_parent();
                self.navigate(&current, found, "parent")?;
            }
            MenuChoice::Move => {
                let Some(index) =
                    self.prompt_index("Enter the new index for the current component: ")?
                else {
                    writeln!(self.output, "Invalid index.")?;
                    return Ok(());
                };
                match current.move_to(index) {
                    Ok(()) => {
                        tracing::info!("Moved {:?} to index {}", current.name(), index);
                        writeln!(self.output, "Moved {} to index {}.", current.name(), index)?;
                    }
                    Err(e) => writeln!(self.output, "Cannot move {}: {}", current.name(), e)?,
                }
            }
            MenuChoice::Exit => {}
        }

        Ok(())
    }

    fn navigate(
        &mut self,
        from: &Rc<Component>,
        found: Option<Rc<Component>>,
        relation: &str,
    ) -> Result<()> {
        match found {
            Some(node) => {
                tracing::info!("Selected {} {:?}", relation, node.name());
                self.current = Some(node);
            }
            None => match self.settings.on_miss {
                MissPolicy::Stay => {
                    writeln!(
                        self.output,
                        "No {} component found, staying on {}.",
                        relation,
                        from.name()
                    )?;
                }
                MissPolicy::Clear => {
                    writeln!(self.output, "No {relation} component found.")?;
                    self.current = None;
                }
            },
        }
        Ok(())
    }

    fn print_current(&mut self) -> Result<()> {
        write!(self.output, "\nCurrent Component: ")?;
        match &self.current {
            Some(node) => {
                let text = node.render(0, &self.display);
                if text.is_empty() {
                    writeln!(self.output, "(hidden) {}", node.name())?;
                } else {
                    write!(self.output, "{text}")?;
                }
            }
            None => writeln!(self.output, "(none)")?,
        }
        Ok(())
    }

    /// Negative or non-numeric input yields `None`
    fn prompt_index(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let index = line
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|i| usize::try_from(i).ok());
        if index.is_none() {
            tracing::warn!("Unusable index input {:?}", line.trim());
        }
        Ok(index)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::build_demo_tree;

    fn run_script(script: &str, config: &Config) -> (Option<Rc<Component>>, String) {
        let root = build_demo_tree().unwrap();
        let mut driver = Driver::new(root, config, script.as_bytes(), Vec::new());
        driver.run().unwrap();
        let current = driver.current().cloned();
        let output = String::from_utf8(driver.into_output()).unwrap();
        (current, output)
    }

    fn clear_config() -> Config {
        let mut config = Config::default();
        config.driver.on_miss = MissPolicy::Clear;
        config
    }

    #[test]
    fn parse_menu_choices() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::SelectChild));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Move));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn navigate_down_and_across() {
        let (current, output) = run_script("1\n0\n1\n0\n2\n1\n5\n", &Config::default());
        assert_eq!(current.unwrap().name(), "Button 1");
        assert!(output.contains("Current Component: Panel: Panel 1\n-Label: Label 1\n"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn parent_of_root_stays_by_default() {
        let (current, output) = run_script("3\n5\n", &Config::default());
        assert_eq!(current.unwrap().name(), "Main Window");
        assert!(output.contains("No parent component found, staying on Main Window."));
    }

    #[test]
    fn miss_clears_current_when_configured() {
        let (current, output) = run_script("1\n9\n3\n5\n", &clear_config());
        assert!(current.is_none());
        assert!(output.contains("No child component found."));
        assert!(output.contains("Current Component: (none)"));
        assert!(output.contains("No component is selected."));
    }

    #[test]
    fn negative_index_is_a_miss() {
        let (current, output) = run_script("1\n-1\n5\n", &Config::default());
        assert_eq!(current.unwrap().name(), "Main Window");
        assert!(output.contains("No child component found"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_, output) = run_script("x\n7\n5\n", &Config::default());
        assert_eq!(output.matches("Invalid choice. Please enter again.").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn move_reorders_current_within_parent() {
        let root = build_demo_tree().unwrap();
        let script = "1\n0\n4\n1\n5\n";
        let config = Config::default();
        let mut driver = Driver::new(root.clone(), &config, script.as_bytes(), Vec::new());
        driver.run().unwrap();

        assert_eq!(root.get_child(0).unwrap().name(), "Panel 2");
        assert_eq!(root.get_child(1).unwrap().name(), "Panel 1");
        let output = String::from_utf8(driver.into_output()).unwrap();
        assert!(output.contains("Moved Panel 1 to index 1."));
    }

    #[test]
    fn parent_reachable_after_descending() {
        let (current, output) = run_script("1\n0\n3\n5\n", &Config::default());
        assert_eq!(current.unwrap().name(), "Main Window");
        assert!(!output.contains("No parent component found"));
    }

    #[test]
    fn siblings_and_parents_from_a_leaf() {
        let script = "1\n1\n1\n0\n2\n1\n3\n2\n0\n5\n";
        let (current, output) = run_script(script, &Config::default());
        assert_eq!(current.unwrap().name(), "Panel 1");
        assert!(output.contains("Current Component: Button: Button 2\n"));
        assert!(!output.contains("component found"));
    }

    #[test]
    fn move_persists_while_driver_owns_tree() {
        let root = build_demo_tree().unwrap();
        let script = "1\n0\n1\n0\n4\n1\n3\n5\n";
        let mut driver = Driver::new(root, &Config::default(), script.as_bytes(), Vec::new());
        driver.run().unwrap();

        let panel = driver.current().cloned().unwrap();
        assert_eq!(panel.name(), "Panel 1");
        assert_eq!(panel.get_child(0).unwrap().name(), "Button 1");
        assert_eq!(panel.get_child(1).unwrap().name(), "Label 1");
        let output = String::from_utf8(driver.into_output()).unwrap();
        assert!(output.contains("Moved Label 1 to index 1."));
    }

    #[test]
    fn move_errors_are_reported() {
        let (_, output) = run_script("4\n0\n1\n0\n4\n7\n5\n", &Config::default());
        assert!(output.contains("Cannot move Main Window: Component has no parent container"));
        assert!(output.contains(
            "Cannot move Panel 1: Index 7 is out of range for a container with 2 children"
        ));
    }

    #[test]
    fn end_of_input_exits() {
        let (current, output) = run_script("1\n1\n", &Config::default());
        assert_eq!(current.unwrap().name(), "Panel 2");
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn shows_tree_on_start_when_configured() {
        let mut config = Config::default();
        config.driver.show_tree_on_start = true;
        let (_, output) = run_script("5\n", &config);
        assert!(output.starts_with("Component tree:\nWindow: Main Window\n-Panel: Panel 1\n"));
    }

    #[test]
    fn hidden_current_is_marked() {
        let root = build_demo_tree().unwrap();
        root.set_visible(false);
        let mut driver = Driver::new(root, &Config::default(), "5\n".as_bytes(), Vec::new());
        driver.run().unwrap();
        let output = String::from_utf8(driver.into_output()).unwrap();
        assert!(output.contains("Current Component: (hidden) Main Window"));
    }
}
