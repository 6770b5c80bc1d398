//! Configuration for the draw engine.

/// Configuration for a [`DrawEngine`](crate::DrawEngine).
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
    /// Maximum recursion depth for nested-table expansion.
    pub depth_limit: u32,
    /// Whether linked tables are expanded recursively.
    pub recursive: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            depth_limit: 5,
            recursive: true,
        }
    }
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum recursion depth.
    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Enable or disable recursive expansion of linked tables.
    pub fn with_recursion(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = DrawConfig::default();
        assert_eq!(cfg.depth_limit, 5);
        assert!(cfg.recursive);
    }

    #[test]
    fn builder_methods() {
        let cfg = DrawConfig::default()
            .with_seed(123)
            .with_depth_limit(2)
            .with_recursion(false);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.depth_limit, 2);
        assert!(!cfg.recursive);
    }
}
