//! The static catalog of known shell commands.
//!
//! A `CommandRegistry` is built once and then only read. The compiler holds its own
//! registry, so concurrent compile calls share it without any locking.

use ahash::AHashMap;

mod catalog;
pub mod definition;

pub use definition::*;

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    index: AHashMap<String, usize>,
}

impl CommandRegistry {
    /// An empty registry. Every command node compiled against it degrades to a placeholder.
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// The registry with the full built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for definition in catalog::builtin_commands() {
            registry.register(definition);
        }
        registry
    }

    /// Adds a definition, replacing any existing entry with the same id in place.
    pub fn register(&mut self, definition: CommandDefinition) {
        match self.index.get(&definition.id) {
            Some(&slot) => self.commands[slot] = definition,
            None => {
                self.index
                    .insert(definition.id.clone(), self.commands.len());
                self.commands.push(definition);
            }
        }
    }

    /// Registers `alias` as a copy of `existing`. Returns `false` if `existing` is unknown.
    pub fn alias(&mut self, alias: &str, existing: &str) -> bool {
        let Some(mut definition) = self.lookup(existing).cloned() else {
            return false;
        };
        definition.id = alias.to_string();
        self.register(definition);
        true
    }

    /// Returns `None` for unknown ids; that is not an error.
    pub fn lookup(&self, id: &str) -> Option<&CommandDefinition> {
        self.index.get(id).map(|&slot| &self.commands[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Commands grouped for the editor palette. Categories come in `Category::ALL`
    /// order, commands in registration order; empty categories are left out.
    pub fn list_by_category(&self) -> Vec<(Category, Vec<&CommandDefinition>)> {
        Category::ALL
            .iter()
            .map(|category| {
                let members: Vec<_> = self
                    .commands
                    .iter()
                    .filter(|c| c.category == *category)
                    .collect();
                (*category, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
