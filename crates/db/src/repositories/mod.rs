//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod application_repo;
pub mod collaboration_repo;
pub mod project_repo;
pub mod session_repo;
pub mod user_repo;
pub mod wallet_repo;

pub use activity_repo::ActivityRepo;
pub use application_repo::ApplicationRepo;
pub use collaboration_repo::CollaborationRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use wallet_repo::WalletRepo;
