use structopt::StructOpt;
use thiserror::Error;

use crate::graph::NumNodes;

/// Node bound shared by edge validation and graph construction.
#[derive(Debug, Clone, StructOpt)]
pub struct GraphConfig {
    /// Exclusive upper bound on node identifiers
    #[structopt(long, env = "MAX_NUM_NODES")]
    pub max_num_nodes: NumNodes,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_num_nodes must be positive")]
    ZeroBound,
}

impl GraphConfig {
    pub fn new(max_num_nodes: NumNodes) -> Self {
        Self { max_num_nodes }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_num_nodes == 0 {
            return Err(ConfigError::ZeroBound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_from_args() {
        let config = GraphConfig::from_iter_safe(["test", "--max-num-nodes", "42"]).unwrap();
        assert_eq!(config.max_num_nodes, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reject_non_numeric_bound() {
        assert!(GraphConfig::from_iter_safe(["test", "--max-num-nodes", "many"]).is_err());
    }

    #[test]
    fn zero_bound_is_invalid() {
        assert_eq!(GraphConfig::new(0).validate(), Err(ConfigError::ZeroBound));
    }
}
