use std::path::Path;

use crate::ast::Node;
use crate::diagnostic::{render_diagnostics, Diagnostic};
use crate::ir::builder::{GenerateError, LogicBuilder};
use crate::ir::{print_program, Instruction};

#[cfg(test)]
mod tests;

/// Options controlling code generation.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Terminate the program with `end`. Off when the listing is spliced
    /// into another program.
    pub emit_end: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { emit_end: true }
    }
}

/// Parse a Mindcode source string into an AST, rendering any errors.
pub fn parse(source: &str, filename: &str) -> Result<Node, Vec<Diagnostic>> {
    crate::parse_source(source, filename)
}

/// Compile a single Mindcode source string to a Logic listing.
pub fn compile(source: &str, filename: &str) -> Result<String, Vec<Diagnostic>> {
    compile_with_options(source, filename, &CompileOptions::default())
}

/// Compile a single Mindcode source string to a Logic listing with options.
pub fn compile_with_options(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> Result<String, Vec<Diagnostic>> {
    let instructions = compile_to_instructions(source, filename, options)?;
    Ok(print_program(&instructions))
}

/// Compile to structured instructions instead of text.
pub fn compile_to_instructions(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> Result<Vec<Instruction>, Vec<Diagnostic>> {
    let program = crate::parse_source(source, filename)?;
    lower_program(&program, options).map_err(|err| {
        let errors = vec![generate_diagnostic(err)];
        render_diagnostics(&errors, filename, source);
        errors
    })
}

/// Parse and generate without producing a listing.
pub fn check(source: &str, filename: &str) -> Result<(), Vec<Diagnostic>> {
    compile_to_instructions(source, filename, &CompileOptions::default()).map(|_| ())
}

/// Compile a source file from disk.
pub fn compile_project(entry_path: &Path) -> Result<String, Vec<Diagnostic>> {
    compile_project_with_options(entry_path, &CompileOptions::default())
}

/// Compile a source file from disk with options.
pub fn compile_project_with_options(
    entry_path: &Path,
    options: &CompileOptions,
) -> Result<String, Vec<Diagnostic>> {
    let source = std::fs::read_to_string(entry_path).map_err(|e| {
        vec![Diagnostic::unlocated(format!(
            "cannot read '{}': {}",
            entry_path.display(),
            e
        ))]
    })?;
    let filename = entry_path.display().to_string();
    compile_with_options(&source, &filename, options)
}

fn lower_program(program: &Node, options: &CompileOptions) -> Result<Vec<Instruction>, GenerateError> {
    let mut builder = LogicBuilder::new();
    if options.emit_end {
        builder.build_program(program)
    } else {
        Ok(builder.lower(program)?.instructions)
    }
}

/// Generation errors carry no source position.
fn generate_diagnostic(err: GenerateError) -> Diagnostic {
    Diagnostic::unlocated(err.message)
        .with_note("code generation stops at the first error".to_string())
}
