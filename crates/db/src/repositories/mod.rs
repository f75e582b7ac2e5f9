//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod category_repo;
pub mod password_reset_repo;
pub mod producer_repo;
pub mod role_repo;
pub mod session_repo;
pub mod tag_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use category_repo::CategoryRepo;
pub use password_reset_repo::PasswordResetRepo;
pub use producer_repo::ProducerRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
