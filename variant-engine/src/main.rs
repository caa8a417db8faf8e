use anyhow::{Context, bail};
use shared::{ApiResponse, ProductDraft};
use variant_engine::{DraftEdit, EngineConfig, RandomSuffix, VariantEngine, utils};

/// Usage: variant-engine <draft.json> [edits.json]
///
/// Applies the edit list (or a single regenerate) to the draft and prints
/// the resulting draft as JSON. A declined edit prints the error envelope
/// and exits non-zero.
fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = EngineConfig::from_env();
    utils::init_logger(&config.log_level);
    config.validate().context("invalid engine configuration")?;

    let mut args = std::env::args().skip(1);
    let Some(draft_path) = args.next() else {
        bail!("usage: variant-engine <draft.json> [edits.json]");
    };

    let raw = std::fs::read_to_string(&draft_path)
        .with_context(|| format!("failed to read draft {draft_path}"))?;
    let draft: ProductDraft = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse draft {draft_path}"))?;
    draft.validate_slots()?;

    let edits: Vec<DraftEdit> = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read edits {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("failed to parse edits {path}"))?
        }
        None => vec![DraftEdit::Regenerate],
    };

    let engine = VariantEngine::new(config.clone());
    let mut suffix = RandomSuffix::new(config.unique_digits);

    tracing::info!(product = %draft.name, edits = edits.len(), "Applying edits");

    let mut current = draft;
    for (index, edit) in edits.into_iter().enumerate() {
        match engine.apply(&current, edit, &mut suffix) {
            Ok(next) => current = next,
            Err(err) => {
                let body = ApiResponse::<()>::error(&err);
                println!("{}", serde_json::to_string_pretty(&body)?);
                bail!("edit #{index} declined: {err}");
            }
        }
    }

    tracing::info!(
        product = %current.name,
        state = ?engine.state(&current),
        variants = current.variants.len(),
        stock = current.stock,
        "Draft ready"
    );
    println!("{}", serde_json::to_string_pretty(&ApiResponse::success(current))?);
    Ok(())
}
