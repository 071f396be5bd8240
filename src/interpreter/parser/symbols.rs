use std::collections::HashMap;

/// The parser's scoped symbol table.
///
/// Tracks which names are declared, and whether they are constants, while
/// the grammar walk is still running. This is what lets the parser reject
/// duplicate declarations, assignments to undeclared names and statically
/// visible reassignments of constants before anything is evaluated.
///
/// Scopes are pushed and popped in lockstep with the blocks the parser
/// enters and leaves. The table is owned by the interpreter session rather
/// than the parser, so an interactive session remembers the names declared
/// by earlier lines.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// name → declared-as-const, innermost scope last.
    scopes: Vec<HashMap<String, bool>>,
}

impl SymbolTable {
    /// Creates a table holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()], }
    }

    /// Opens a nested scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost scope. The global scope stays put.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The number of open scopes, global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Drops scopes until only `depth` remain. Used by panic-mode recovery,
    /// which may abandon a parse in the middle of nested blocks.
    pub fn truncate(&mut self, depth: usize) {
        while self.scopes.len() > depth.max(1) {
            self.scopes.pop();
        }
    }

    /// Records a declaration in the innermost scope.
    pub fn declare(&mut self, name: &str, constant: bool) {
        self.scopes
            .last_mut()
            .expect("at least the global scope")
            .insert(name.to_string(), constant);
    }

    /// Whether the innermost scope already declares `name`.
    #[must_use]
    pub fn declared_in_current(&self, name: &str) -> bool {
        self.scopes
            .last()
            .expect("at least the global scope")
            .contains_key(name)
    }

    /// Whether any open scope declares `name`.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains_key(name))
    }

    /// Whether the nearest declaration of `name` is a constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        for scope in self.scopes.iter().rev() {
            if let Some(constant) = scope.get(name) {
                return *constant;
            }
        }
        false
    }
}
