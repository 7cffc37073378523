/// A server-side script fragment (e.g. a Groovy closure) shipped as part of
/// a traversal. `argc` is always reported as `-1`: unlike the reference
/// implementation, which recovers an argument count by compiling the script
/// host-side, this crate carries the script opaquely and never evaluates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub language: String,
    pub script: String,
    pub argc: i32,
}

/// The language tag used when a lambda does not specify one.
pub const DEFAULT_LAMBDA_LANGUAGE: &str = "gremlin-groovy";

impl Lambda {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            language: DEFAULT_LAMBDA_LANGUAGE.to_string(),
            script: script.into(),
            argc: -1,
        }
    }

    pub fn with_language(script: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            script: script.into(),
            argc: -1,
        }
    }
}
