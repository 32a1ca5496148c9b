//! Spider diagram data model and rewrite framework.
//!
//! - [`zone`], [`region`]: immutable zone and region values.
//! - [`zones`]: contour algebra over zones and regions.
//! - [`diagram`]: the spider diagram tree (null, primary, compound).
//! - [`transform`]: pre-order structural rewriting of diagram trees.
//!
//! Everything here is pure: values are immutable once built and every
//! rewrite produces a new tree.

pub mod diagram;
pub mod error;
pub mod id;
pub mod operator;
pub mod region;
pub mod transform;
pub mod zone;
pub mod zones;

// Re-export commonly used types
pub use diagram::{CompoundDiagram, PrimaryDiagram, SpiderDiagram, SpiderName};
pub use error::CoreError;
pub use id::SubDiagramIndex;
pub use operator::{Arity, Operator};
pub use region::Region;
pub use transform::{transform, Transformer, Visit};
pub use zone::{ContourName, Zone};
