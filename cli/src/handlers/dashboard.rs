//! Handlers for the dashboard and operator list

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{DashboardView, UserList};

pub fn show_dashboard(state: &mut AppState, top: usize) -> AppResult<()> {
    let view = DashboardView {
        stats: state.store.dashboard_stats(),
        best_sellers: state.store.best_sellers(top),
    };
    state.emit(&view)
}

pub fn list_users(state: &mut AppState) -> AppResult<()> {
    state.emit(&UserList(state.store.users()))
}

pub fn whoami(state: &mut AppState) -> AppResult<()> {
    let user = state.require_session()?;
    state.emit(user)
}
