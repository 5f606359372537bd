//! Well-known role name constants.
//!
//! `users.role` is free text, not an enum. These are the values the platform
//! itself assigns; callers comparing roles should use these constants rather
//! than invent new spellings.

pub const ROLE_USER: &str = "user";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_ADMIN: &str = "admin";
