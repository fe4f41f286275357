pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] arcrank_graph::Error),

    #[error("edge {index} endpoint {node} has no rank in the ordering")]
    MissingRank { index: usize, node: String },
}
