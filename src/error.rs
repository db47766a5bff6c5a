use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaintError>;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Commit failed: {0}")]
    CommitFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

// gix errors are large, keep the enum small by boxing them on conversion
impl From<gix::open::Error> for PaintError {
    fn from(err: gix::open::Error) -> Self {
        PaintError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for PaintError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        PaintError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for PaintError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        PaintError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for PaintError {
    fn from(err: gix::object::commit::Error) -> Self {
        PaintError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for PaintError {
    fn from(err: gix::objs::decode::Error) -> Self {
        PaintError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::discover::Error> for PaintError {
    fn from(err: gix::discover::Error) -> Self {
        PaintError::GitDiscover(Box::new(err))
    }
}
