use crate::{
    Error,
    error::ErrorTree,
    node::Schema,
    resolve::ResolvedModel,
    validate::validate_schema,
};
use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// SCHEMA
/// the static data structure
///

static SCHEMA: LazyLock<RwLock<Schema>> = LazyLock::new(|| RwLock::new(Schema::new()));

static SCHEMA_VALIDATED: OnceLock<bool> = OnceLock::new();

/// Resolution cache: one merged declaration set per concrete model type.
static RESOLVED: LazyLock<RwLock<BTreeMap<String, Arc<ResolvedModel>>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

/// Acquire a write guard to the global schema during model definition.
pub fn schema_write() -> RwLockWriteGuard<'static, Schema> {
    SCHEMA
        .write()
        .expect("schema RwLock poisoned while acquiring write lock")
}

// schema_read
// just reads the schema directly without validation
pub(crate) fn schema_read() -> RwLockReadGuard<'static, Schema> {
    SCHEMA
        .read()
        .expect("schema RwLock poisoned while acquiring read lock")
}

/// Read the global schema, validating it exactly once per process.
pub fn get_schema() -> Result<RwLockReadGuard<'static, Schema>, Error> {
    let schema = schema_read();
    validate(&schema).map_err(BuildError::Validation)?;

    Ok(schema)
}

/// Cached resolution entry point used by the runtime. The first call per
/// path performs the ancestor merge; every later call returns the same
/// `Arc`, so repeated instantiation never rebinds.
pub fn resolved_model(path: &str) -> Result<Arc<ResolvedModel>, Error> {
    if let Some(hit) = RESOLVED
        .read()
        .expect("resolution cache RwLock poisoned while acquiring read lock")
        .get(path)
    {
        return Ok(hit.clone());
    }

    let schema = get_schema()?;
    let resolved = Arc::new(schema.resolve(path)?);

    RESOLVED
        .write()
        .expect("resolution cache RwLock poisoned while acquiring write lock")
        .entry(path.to_string())
        .or_insert(resolved.clone());

    Ok(resolved)
}

// validate
fn validate(schema: &Schema) -> Result<(), ErrorTree> {
    if SCHEMA_VALIDATED.get().copied().unwrap_or(false) {
        return Ok(());
    }

    validate_schema(schema)?;

    SCHEMA_VALIDATED.set(true).ok();

    Ok(())
}
