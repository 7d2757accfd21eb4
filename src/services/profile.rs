use crate::{error::Result, infrastructure::store::ProfileStore};

/// Resolves a user's display name.
///
/// A missing profile and an empty name both resolve to `None`. Any store
/// failure is reported as a profile query error.
pub async fn lookup_user_name<S: ProfileStore>(
    store: &S,
    user_id: &str,
) -> Result<Option<String>> {
    let row = store
        .find_profile_name(user_id)
        .await
        .map_err(|e| e.into_profile_query())?;

    let name = row
        .and_then(|profile| profile.name)
        .filter(|name| !name.is_empty());

    tracing::debug!(found = name.is_some(), "Profile name resolved");

    Ok(name)
}
