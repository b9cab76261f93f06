pub mod component;
pub mod registry;

pub use component::{CalculationBasis, ComponentDefinition, ComponentKind};
pub use registry::{ComponentRegistry, ResolvedComponent, SpecialRule};
