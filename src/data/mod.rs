mod artifacts;
mod catalog;
mod interactions;

pub use artifacts::{load_artifact, load_catalog, load_cf_bundle};
pub use catalog::Catalog;
pub use interactions::{CfBundle, CfBundleArtifact};
