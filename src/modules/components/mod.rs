pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{
    CalculationBasis, ComponentDefinition, ComponentKind, ComponentRegistry, ResolvedComponent,
    SpecialRule,
};
pub use repositories::ComponentRepository;
