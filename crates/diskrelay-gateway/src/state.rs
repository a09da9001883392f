use std::sync::Arc;

use diskrelay_resolver::ShareResolver;
use url::Url;

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn ShareResolver>,
    public_base: Url,
}

impl AppState {
    pub fn new(resolver: Arc<dyn ShareResolver>, public_base: Url) -> Self {
        Self {
            resolver,
            public_base,
        }
    }

    pub fn resolver(&self) -> &dyn ShareResolver {
        self.resolver.as_ref()
    }

    /// Provider domain used to synthesize public-share URLs.
    pub fn public_base(&self) -> &Url {
        &self.public_base
    }
}
