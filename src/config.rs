use std::env;

/// Nested evaluations allowed before [`crate::LionError::DepthExceeded`].
/// Must fit a 2 MiB test-thread stack in an unoptimised build, where one
/// level through `ifte` costs several KiB.
pub const MAX_EVAL_DEPTH: usize = 128;

/// Host stack to reserve per evaluation level when sizing a thread for a
/// configured depth.
pub const STACK_PER_LEVEL: usize = 16 * 1024;

/// Quote nesting accepted by the parser. Dropping, printing and comparing
/// quotes recurse once per level.
pub const MAX_PARSE_DEPTH: usize = 64;

pub const MAX_DEPTH_VAR: &str = "LION_MAX_DEPTH";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: MAX_EVAL_DEPTH,
        }
    }
}

impl Config {
    /// Defaults overridden by `LION_MAX_DEPTH` when it holds a positive integer.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => log::warn!("ignoring {}={:?}: not a positive integer", MAX_DEPTH_VAR, raw),
            }
        }
        config
    }

    /// Stack size a thread needs to reach `max_depth` without overflowing.
    pub fn stack_size(&self) -> usize {
        self.max_depth.saturating_mul(STACK_PER_LEVEL)
    }
}
