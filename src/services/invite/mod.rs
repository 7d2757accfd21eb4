use std::collections::HashSet;

use rand::Rng;

use crate::{
    error::{AppError, Result},
    infrastructure::store::{InviteCode, InviteCodeStore},
};

pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const CODE_LEN: usize = 8;
pub const DEFAULT_BATCH_SIZE: usize = 200;
pub const MAX_BATCH_SIZE: usize = 10_000;
pub const PREVIEW_LEN: usize = 5;

/// Draw ceiling per requested code before the batch is abandoned.
const MAX_ATTEMPTS_PER_CODE: usize = 100;

pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LEN && code.bytes().all(|c| ALPHABET.contains(&c))
}

/// Draws codes until `count` distinct ones exist, in first-drawn order.
pub fn generate_unique_codes<R: Rng>(rng: &mut R, count: usize) -> Result<Vec<String>> {
    let max_attempts = count.saturating_mul(MAX_ATTEMPTS_PER_CODE);

    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);
    let mut attempts = 0;

    while codes.len() < count {
        if attempts >= max_attempts {
            return Err(AppError::CodeSpaceExhausted {
                generated: codes.len(),
                attempts,
            });
        }
        attempts += 1;

        let code = generate_code(rng);
        if seen.insert(code.clone()) {
            codes.push(code);
        }
    }

    if attempts > count {
        tracing::debug!(collisions = attempts - count, "Regenerated colliding codes");
    }

    Ok(codes)
}

/// Generates a batch and writes it to `store` in one insert.
///
/// Uniqueness is only enforced within the batch; collisions with codes
/// from earlier batches are left to the table's own constraint.
pub async fn create_batch<S, R>(store: &S, rng: &mut R, count: usize) -> Result<Vec<InviteCode>>
where
    S: InviteCodeStore,
    R: Rng,
{
    if count == 0 || count > MAX_BATCH_SIZE {
        return Err(AppError::Validation(format!(
            "Batch size must be between 1 and {MAX_BATCH_SIZE}"
        )));
    }

    let invites: Vec<InviteCode> = generate_unique_codes(rng, count)?
        .into_iter()
        .map(InviteCode::new)
        .collect();
    debug_assert!(invites.iter().all(|invite| is_valid_code(&invite.code)));

    store.insert_invite_codes(&invites).await?;
    tracing::info!(count = invites.len(), "Invite codes inserted");

    Ok(invites)
}

/// Console report for a finished run: all codes on a dry run, otherwise a
/// success line followed by the first `PREVIEW_LEN` codes.
pub fn report_lines(invites: &[InviteCode], dry_run: bool) -> Vec<String> {
    let (header, shown) = if dry_run {
        (
            format!(
                "Generated {} invite codes (dry run, nothing inserted):",
                invites.len()
            ),
            invites,
        )
    } else {
        (
            format!("Successfully inserted {} invite codes", invites.len()),
            &invites[..invites.len().min(PREVIEW_LEN)],
        )
    };

    let mut lines = vec![header];
    if !dry_run {
        lines.push("Sample codes:".to_string());
    }
    lines.extend(shown.iter().map(|invite| format!("  {}", invite.code)));
    lines
}
