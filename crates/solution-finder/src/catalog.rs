use schemars::schema_for;
use serde_json::Value;

use crate::bank::QuestionBank;
use crate::error::CatalogError;
use crate::resolver::SolutionTable;
use crate::spec::catalog::CatalogSpec;
use crate::validate::validate;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Validated question bank and solution table, ready for sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub id: String,
    pub title: String,
    pub version: String,
    bank: QuestionBank,
    solutions: SolutionTable,
}

impl Catalog {
    /// The AI solution finder catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let spec: CatalogSpec = serde_json::from_str(raw)?;
        Self::from_spec(&spec)
    }

    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let spec: CatalogSpec = serde_json::from_value(value)?;
        Self::from_spec(&spec)
    }

    pub fn from_spec(spec: &CatalogSpec) -> Result<Self, CatalogError> {
        validate(spec)?;
        Ok(Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            version: spec.version.clone(),
            bank: QuestionBank::from_validated(&spec.questions),
            solutions: SolutionTable::from_validated(&spec.solutions, &spec.fallback),
        })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn solutions(&self) -> &SolutionTable {
        &self.solutions
    }
}

/// JSON Schema describing the catalog file format.
pub fn catalog_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schema_for!(CatalogSpec))
}
