//! Handlers for stock movements and history

use shared::{parse_quantity, MovementType, DEFAULT_IN_REASON, DEFAULT_OUT_REASON};

use crate::cli::MoveArgs;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{MovementList, MovementOutcome};

pub fn stock_in(state: &mut AppState, args: MoveArgs) -> AppResult<()> {
    record(state, args, MovementType::In)
}

pub fn stock_out(state: &mut AppState, args: MoveArgs) -> AppResult<()> {
    record(state, args, MovementType::Out)
}

fn record(state: &mut AppState, args: MoveArgs, movement_type: MovementType) -> AppResult<()> {
    let Some(quantity) = parse_quantity(&args.quantity) else {
        tracing::debug!(raw = %args.quantity, "Quantity is not a positive integer, nothing recorded");
        return state.emit(&MovementOutcome {
            recorded: false,
            movement: None,
        });
    };

    let reason = args.reason.unwrap_or_else(|| {
        if movement_type.is_inbound() {
            DEFAULT_IN_REASON.to_string()
        } else {
            DEFAULT_OUT_REASON.to_string()
        }
    });

    let session = state.session.clone();
    let outcome = state.store.apply_movement(
        &args.product_id,
        quantity,
        movement_type,
        &reason,
        session.as_ref(),
    )?;

    let movement = outcome.map(|(_, movement)| movement);
    state.emit(&MovementOutcome {
        recorded: movement.is_some(),
        movement,
    })
}

/// Print movement history, most recent first
pub fn history(state: &mut AppState, product_id: Option<&str>, limit: Option<usize>) -> AppResult<()> {
    let mut movements = match product_id {
        Some(id) => state.store.history_for(id),
        None => state.store.movements().iter().collect(),
    };
    if let Some(limit) = limit {
        movements.truncate(limit);
    }
    state.emit(&MovementList(movements))
}
