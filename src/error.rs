use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("git repository not found in {}", path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: Box<gix::discover::Error>,
    },
    #[error("repository has no commits")]
    EmptyHistory,
    #[error("render window contains no days")]
    EmptyRenderWindow,
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error(transparent)]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error(transparent)]
    RevWalk(#[from] Box<gix::revision::walk::Error>),
    #[error(transparent)]
    RevWalkIter(#[from] Box<gix::revision::walk::iter::Error>),
    #[error(transparent)]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error(transparent)]
    Commit(#[from] Box<gix::object::commit::Error>),
}

impl GraphError {
    pub fn repository_not_found(path: impl Into<PathBuf>, err: gix::discover::Error) -> Self {
        GraphError::RepositoryNotFound {
            path: path.into(),
            source: Box::new(err),
        }
    }
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::reference::find::existing::Error> for GraphError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GraphError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GraphError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GraphError::HeadPeel(Box::new(err))
    }
}

impl From<gix::revision::walk::Error> for GraphError {
    fn from(err: gix::revision::walk::Error) -> Self {
        GraphError::RevWalk(Box::new(err))
    }
}

impl From<gix::revision::walk::iter::Error> for GraphError {
    fn from(err: gix::revision::walk::iter::Error) -> Self {
        GraphError::RevWalkIter(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for GraphError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        GraphError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GraphError {
    fn from(err: gix::object::commit::Error) -> Self {
        GraphError::Commit(Box::new(err))
    }
}
