use std::path::PathBuf;

use wellpath_core::models::identity::Identity;
use wellpath_core::remote::BoxFuture;
use wellpath_gate::ports::IdentityProvider;

use crate::config;

/// Identity read from the persisted sign-in in the config file.
///
/// Reads the file on every call so a `logout` in another terminal is seen
/// on the next screen entry. Any read or parse failure means "no identity".
#[derive(Debug, Clone)]
pub struct ConfigIdentity {
    path: PathBuf,
}

impl ConfigIdentity {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl IdentityProvider for ConfigIdentity {
    fn current_identity(&self) -> BoxFuture<'_, Option<Identity>> {
        Box::pin(async move {
            let path = self.path.clone();
            let loaded = tokio::task::spawn_blocking(move || config::load_config_from(&path)).await;
            match loaded {
                Ok(Ok(config)) => config.session.and_then(|s| s.identity()),
                Ok(Err(e)) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "could not read stored session");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "identity lookup task failed");
                    None
                }
            }
        })
    }
}
