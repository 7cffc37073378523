/// Tunables for a codec instance. Unlike the registry overrides, these
/// govern engine behavior rather than per-type dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum recursion depth `Encoder`/`Decoder` will follow into nested
    /// values (list/set/map elements, graph element fields, traverser
    /// objects, ...) before raising `NestingTooDeep`. The wire format has no
    /// inherent depth limit, so decoding attacker-controlled bytes without
    /// one risks an unbounded native-stack recursion.
    pub max_nesting_depth: usize,
}

/// Matches the default nesting most real traversal results stay well under;
/// deliberately conservative relative to the native stack's actual limit.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
