//! Deployment identity and filesystem layout.
//!
//! [`DeploymentIdentity`] pulls team, app, type, instance and release out of a
//! merged configuration; [`PathDeriver`] turns it into [`DeploymentPaths`].
//! Nothing here touches the filesystem.

pub mod identity;
pub mod paths;

pub use identity::{
    DeploymentIdentity, DeploymentType, DEFAULT_RELEASE_VERSION, INSTANCE_FQN_KEY,
    INSTANCE_ID_KEY,
};
pub use paths::{
    DeploymentPaths, LegacyLayout, PathDeriver, PathScheme, INSTANCES_DIR, LEGACY_INSTANCE_BASE,
    LEGACY_RELEASE_BASE, RELEASES_DIR,
};
