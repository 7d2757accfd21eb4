use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, PoisonError},
};

use crate::{
    error::{AppError, Result},
    infrastructure::store::{InviteCode, InviteCodeStore, ProfileName, ProfileStore},
};

/// In-process store used for dry runs and tests.
///
/// Enforces uniqueness on `invite_codes.code` the way the hosted table's
/// unique constraint would, and can be told to fail every call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, Option<String>>,
    invite_codes: Mutex<Vec<InviteCode>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, id: &str, name: Option<&str>) -> Self {
        self.profiles.insert(id.to_string(), name.map(str::to_string));
        self
    }

    /// Makes every subsequent call return a store error with `message`.
    pub fn failing_with(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn invite_codes(&self) -> Vec<InviteCode> {
        self.invite_codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(AppError::Store(message.clone())),
            None => Ok(()),
        }
    }
}

impl ProfileStore for MemoryStore {
    async fn find_profile_name(&self, user_id: &str) -> Result<Option<ProfileName>> {
        self.check_failure()?;

        Ok(self
            .profiles
            .get(user_id)
            .map(|name| ProfileName { name: name.clone() }))
    }
}

impl InviteCodeStore for MemoryStore {
    async fn insert_invite_codes(&self, codes: &[InviteCode]) -> Result<()> {
        self.check_failure()?;

        let mut stored = self
            .invite_codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut seen: HashSet<&str> = stored.iter().map(|invite| invite.code.as_str()).collect();
        for invite in codes {
            if !seen.insert(invite.code.as_str()) {
                return Err(AppError::Store(format!(
                    "duplicate key value violates unique constraint \"invite_codes_code_key\" ({})",
                    invite.code
                )));
            }
        }

        stored.extend_from_slice(codes);
        Ok(())
    }
}
