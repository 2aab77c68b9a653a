use dialoguer::Confirm;

/// Blocking yes/no question put to the user before a destructive call.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive terminal prompt. Defaults to "no"; a prompt that cannot be
/// shown (no TTY) counts as a refusal.
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new()
            .with_prompt(format!("  {prompt}"))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt unavailable; treating as no");
                false
            }
        }
    }
}

/// Non-interactive approval, for `--yes`.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
