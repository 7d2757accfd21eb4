pub mod entities;
pub mod memory;
pub mod rest;

use std::future::Future;

use crate::error::Result;

pub use entities::{InviteCode, ProfileName};
pub use memory::MemoryStore;
pub use rest::RestStore;

pub const INVITE_CODES_TABLE: &str = "invite_codes";
pub const PROFILES_TABLE: &str = "profiles";

/// Read access to externally owned user profiles.
pub trait ProfileStore: Send + Sync + 'static {
    /// Fetches at most one profile by id, selecting only its name.
    ///
    /// A missing profile is `Ok(None)`, not an error.
    fn find_profile_name(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<ProfileName>>> + Send;
}

pub trait InviteCodeStore: Send + Sync {
    /// Inserts the whole batch in a single request.
    fn insert_invite_codes(&self, codes: &[InviteCode]) -> impl Future<Output = Result<()>> + Send;
}
