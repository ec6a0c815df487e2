use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// Stable identifier of a recipe in whatever store the host application keeps.
///
/// The planner and the grocery list never look inside a recipe; they only
/// carry this reference around and hand it to an [`IngredientResolver`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeRef(String);

impl RecipeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh ULID-backed reference for recipes created in memory.
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeRef {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RecipeRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RecipeRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lookup from a recipe reference to its ordered ingredient lines.
///
/// `None` means the recipe is unknown; callers treat that as "contributes
/// nothing" rather than as a failure. Implementations must be pure lookups.
pub trait IngredientResolver: Send + Sync {
    fn resolve(&self, recipe: &RecipeRef) -> Option<Vec<String>>;
}

impl<F> IngredientResolver for F
where
    F: Fn(&RecipeRef) -> Option<Vec<String>> + Send + Sync,
{
    fn resolve(&self, recipe: &RecipeRef) -> Option<Vec<String>> {
        self(recipe)
    }
}

impl<S> IngredientResolver for HashMap<RecipeRef, Vec<String>, S>
where
    S: BuildHasher + Send + Sync,
{
    fn resolve(&self, recipe: &RecipeRef) -> Option<Vec<String>> {
        self.get(recipe).cloned()
    }
}

/// Resolver that knows no recipes at all.
pub fn unresolved(_recipe: &RecipeRef) -> Option<Vec<String>> {
    None
}
