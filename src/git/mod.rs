mod commit;
mod repo;

pub use commit::GitCommitter;
pub use repo::GitRepo;
