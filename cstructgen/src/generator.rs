//! The generator façade.
//!
//! Owns the configuration and the state accumulated across repeated
//! [`Generator::add_type`] calls, and exposes the two-step API: accumulate
//! types, then write the rendered header once.

use crate::collect::collect_shape;
use crate::defs::{IncludeSet, StructDefs, TypeModifier};
use crate::error::CodegenError;
use crate::render::render_header;
use cstructgen_shape::{CShape, ShapeError, TypeShape, validate_shape};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::error;

/// Options that get passed to [`Generator::new`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// If an error is encountered and this is true the error will be logged
    /// and the process will exit with a non-zero exit code.
    pub exit_on_error: bool,
    /// Maps discovered record names to output record names. If a record is
    /// collected whose name is a key of this map, the corresponding C struct
    /// is emitted under the mapped name instead.
    pub rename: HashMap<String, String>,
}

/// Accumulates struct definitions across [`Generator::add_type`] calls and
/// renders them as a single C header.
///
/// State only ever grows: a failing call leaves everything accumulated by
/// prior successful calls intact. Not safe for concurrent use without
/// external locking.
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    structs: StructDefs,
    includes: IncludeSet,
}

impl Generator {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            structs: StructDefs::new(),
            includes: IncludeSet::new(),
        }
    }

    /// Adds `T` and every record reachable from it to the generator.
    ///
    /// `T` must describe a named record. Records already collected under the
    /// same name are not expanded again, so adding overlapping types does not
    /// duplicate struct bodies in the output.
    ///
    /// # Errors
    /// Returns `CodegenError` if any reachable field has no faithful C
    /// representation. Under `exit_on_error` the error is logged and the
    /// process terminates instead.
    pub fn add_type<T: CShape>(&mut self) -> Result<(), CodegenError> {
        let result = self.add_shape(T::shape());
        self.apply_exit_policy(result)
    }

    fn add_shape(&mut self, shape: TypeShape) -> Result<(), CodegenError> {
        if !shape.is_record() {
            // The root path is empty: there is no field yet to point at.
            return Err(ShapeError::invalid_type(shape.kind_name(), "").into());
        }
        validate_shape(&shape, "")?;
        collect_shape(
            &shape,
            "",
            "",
            TypeModifier::None,
            &self.options.rename,
            &mut self.structs,
            &mut self.includes,
        );
        Ok(())
    }

    /// Renders the accumulated definitions as C header text guarded by
    /// `guard`.
    #[must_use]
    pub fn render(&self, guard: &str) -> String {
        render_header(&self.structs, &self.includes, guard)
    }

    /// Writes the rendered header to `path`, creating or truncating it.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the destination cannot be created or
    /// written. Under `exit_on_error` the error is logged and the process
    /// terminates instead.
    pub fn write_to(&self, path: impl AsRef<Path>, guard: &str) -> Result<(), CodegenError> {
        let result = self.try_write(path.as_ref(), guard);
        self.apply_exit_policy(result)
    }

    fn try_write(&self, path: &Path, guard: &str) -> Result<(), CodegenError> {
        let mut file = File::create(path)?;
        file.write_all(self.render(guard).as_bytes())?;
        Ok(())
    }

    fn apply_exit_policy(&self, result: Result<(), CodegenError>) -> Result<(), CodegenError> {
        if self.options.exit_on_error {
            if let Err(err) = &result {
                error!(%err, "struct generation failed");
                std::process::exit(1);
            }
        }
        result
    }
}
