pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extract;
pub mod generate;
pub mod io;
pub mod mapping;
pub mod report;

pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    AuthScheme, ControllerInfo, FieldInfo, HttpVerb, Inventory, ProjectType, RelationKind,
    Relationship, RouteDescriptor, StructuralEntity,
};
pub use report::AssessmentReport;
