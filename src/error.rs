use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The corpus cannot fill a workload bucket of the requested size.
    #[error(
        "corpus holds {available} distinct words of length {length}, workload wants {requested}"
    )]
    WorkloadExhausted {
        length: usize,
        available: usize,
        requested: usize,
    },

    #[error("{}", .0)]
    Io(#[from] std::io::Error),

    #[error("{}", .0)]
    Config(#[from] serde_yaml::Error),
}
