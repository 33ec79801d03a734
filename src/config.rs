/// Default limit for nested groups and function calls.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub(crate) max_depth: usize,
    pub(crate) allow_trailing_input: bool,
}

impl EvaluatorConfig {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_input: false,
        }
    }

    /// Maximum number of nested parentheses / function calls.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Stop after the first complete expression instead of rejecting whatever follows it.
    pub fn allow_trailing_input(mut self, allow: bool) -> Self {
        self.allow_trailing_input = allow;
        self
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn allows_trailing_input(&self) -> bool {
        self.allow_trailing_input
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.get_max_depth(), DEFAULT_MAX_DEPTH);
        assert!(!config.allows_trailing_input());
    }

    #[test]
    fn test_builder_methods() {
        let config = EvaluatorConfig::new()
            .max_depth(4)
            .allow_trailing_input(true);
        assert_eq!(config.get_max_depth(), 4);
        assert!(config.allows_trailing_input());
    }
}
