pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge and weight arrays differ in length: {edges} edges, {weights} weights")]
    LengthMismatch { edges: usize, weights: usize },

    #[error("node {node} appears more than once in the node sequence")]
    DuplicateNode { node: String },

    #[error("edge {index} endpoint {node} is not in the node sequence")]
    UnknownEndpoint { index: usize, node: String },

    #[error("edge {index} is a self-loop on {node}")]
    SelfLoop { index: usize, node: String },
}
