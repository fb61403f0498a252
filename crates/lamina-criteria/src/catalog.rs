//! Criterion catalog — an explicit, caller-constructed set of criteria.
//!
//! There is no process-wide registry: whoever needs to enumerate or look
//! up criteria builds a catalog and passes it along. Construction is
//! where extension keys are resolved and validated, so a missing
//! material parameter surfaces here, once, not inside `evaluate`.

use std::fmt;

use lamina_material::MaterialStrengths;
use lamina_types::LaminaResult;

use crate::christensen::Christensen;
use crate::cuntze::Cuntze;
use crate::edge::Edge;
use crate::fiber_only::FiberOnly;
use crate::hashin::Hashin;
use crate::max_strain::MaxStrain;
use crate::mayes::Mayes;
use crate::rotem::Rotem;
use crate::sun::Sun;
use crate::traits::FailureCriterion;
use crate::tsai_hill::TsaiHill;
use crate::ztl::Ztl;

/// An ordered collection of failure criteria, looked up by name.
pub struct CriterionCatalog {
    criteria: Vec<Box<dyn FailureCriterion>>,
}

impl CriterionCatalog {
    /// Builds the catalog of all 11 bundled criteria against a material.
    ///
    /// Fails if the material lacks an extension key a criterion
    /// requires (Cuntze, Rotem, MaxStrain).
    pub fn with_defaults(material: &MaterialStrengths) -> LaminaResult<Self> {
        let mut catalog = Self::empty();
        catalog.register(Box::new(TsaiHill::new()));
        catalog.register(Box::new(Hashin::new()));
        catalog.register(Box::new(Cuntze::from_material(material)?));
        catalog.register(Box::new(Christensen::new()));
        catalog.register(Box::new(Mayes::new()));
        catalog.register(Box::new(Sun::new()));
        catalog.register(Box::new(Rotem::from_material(material)?));
        catalog.register(Box::new(Ztl::from_material(material)));
        catalog.register(Box::new(Edge::new()));
        catalog.register(Box::new(MaxStrain::from_material(material)?));
        catalog.register(Box::new(FiberOnly::new()));
        Ok(catalog)
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Registers a criterion at the end of the enumeration order.
    pub fn register(&mut self, criterion: Box<dyn FailureCriterion>) {
        self.criteria.push(criterion);
    }

    /// Looks up a criterion by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&dyn FailureCriterion> {
        self.criteria
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Returns all criterion names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    /// Iterates the criteria in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FailureCriterion> {
        self.criteria.iter().map(|c| c.as_ref())
    }

    /// Returns the number of registered criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

// Boxed trait objects carry no state worth printing; the names are the
// catalog's identity.
impl fmt::Debug for CriterionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriterionCatalog")
            .field("criteria", &self.names())
            .finish()
    }
}
