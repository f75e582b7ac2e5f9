//! Role names as stored in the `roles` table.
//!
//! Role *ids* are database-assigned; handlers compare against these name
//! constants so a reseeded database cannot silently change authorization.

/// Full access: catalogue administration, user management, publishing.
pub const ROLE_ADMIN: &str = "admin";

/// Regular registered user: can author catalogue entries and manage
/// their own profile.
pub const ROLE_USER: &str = "user";
