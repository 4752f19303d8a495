/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression variants and operators
/// - statements: Definitions for the statement variants
/// - types: Definitions for the declared value type tags
pub mod expressions;
pub mod statements;
pub mod types;
