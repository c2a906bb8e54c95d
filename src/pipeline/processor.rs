use crate::models::TransactionEvent;
use crate::pipeline::message::{format_reduced, format_rich, AlertFields, TokenFields};
use crate::state::AppState;
use serde_json::Value;
use tracing::{debug, error, info};

/// Counts for one webhook batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub received: usize,
    pub alerted: usize,
    pub delivery_failures: usize,
    pub skipped: usize,
}

/// Run every event of a webhook batch through dedupe, threshold filter,
/// enrichment, formatting and delivery.
///
/// Malformed events are skipped one by one; nothing here fails the batch.
pub async fn process_batch(state: &AppState, events: Vec<Value>) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        received: events.len(),
        ..Default::default()
    };
    // SOL price is fetched at most once per batch, on the first event that needs it.
    let mut sol_price: Option<Option<f64>> = None;

    for raw in events {
        let event: TransactionEvent = match serde_json::from_value(raw) {
            Ok(event) => event,
            Err(e) => {
                debug!("Skipping malformed event: {}", e);
                outcome.skipped += 1;
                continue;
            }
        };

        let Some(text) = build_alert(state, &event, &mut sol_price).await else {
            outcome.skipped += 1;
            continue;
        };

        match state.telegram.send_alert(&text).await {
            Ok(()) => outcome.alerted += 1,
            Err(e) => {
                error!("Failed to deliver alert: {}", e);
                outcome.delivery_failures += 1;
            }
        }
    }

    info!(
        "Processed webhook batch: {} received, {} alerted, {} failed, {} skipped",
        outcome.received, outcome.alerted, outcome.delivery_failures, outcome.skipped
    );
    outcome
}

/// Returns the alert text for `event`, or `None` when it is filtered out.
async fn build_alert(
    state: &AppState,
    event: &TransactionEvent,
    sol_price: &mut Option<Option<f64>>,
) -> Option<String> {
    let signature = event.signature.as_deref().filter(|s| !s.is_empty())?;

    // Recorded before any lookups so a redelivery mid-processing is still suppressed.
    if !state.seen.insert(signature).await {
        return None;
    }

    let Some(transfer) = event.first_native_transfer() else {
        debug!("No native transfer in {}", signature);
        return None;
    };

    let amount_sol = transfer.amount_sol();
    if amount_sol < state.config.min_alert_sol {
        debug!("Below threshold ({} SOL): {}", amount_sol, signature);
        return None;
    }

    let (from, to) = {
        let store = state.store.lock().await;
        (
            store.resolve(transfer.from_user_account.as_deref().unwrap_or("unknown")),
            store.resolve(transfer.to_user_account.as_deref().unwrap_or("unknown")),
        )
    };

    let price = match *sol_price {
        Some(price) => price,
        None => {
            let price = state.market.sol_price().await;
            *sol_price = Some(price);
            price
        }
    };

    let detail = if state.config.enrich_tx_detail {
        state.explorer.transaction_detail(signature).await
    } else {
        None
    };

    let fields = AlertFields {
        signature,
        from: &from,
        to: &to,
        amount_sol,
        sol_price: price,
        detail: detail.as_ref(),
    };

    if let Some(mint) = event.first_token_mint() {
        let metadata = state.market.token_metadata(mint).await;
        if !metadata.is_empty() {
            return Some(format_rich(&fields, &TokenFields { mint, metadata: &metadata }));
        }
    }

    Some(format_reduced(&fields))
}
