//! Last-resort render fault containment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed page tree at the app root. A descendant view that
//! produces an `Err` collapses the whole subtree to the circuit breaker
//! screen; the only way back is a full reload, which also re-creates the
//! auth session and layout state.
//!
//! DESIGN
//! ======
//! `FaultState` is the framework-free state machine: `Normal` until the
//! first fault, then `Faulted` for good. The component renders through
//! [`FaultState::supervise`] and latches faults reported by the Leptos error
//! boundary, so a later recovery of the erroring view does not bring the
//! subtree back.
//!
//! Panics are not faults here: in the browser they abort the WASM instance
//! and are reported by `console_error_panic_hook`.

#[cfg(test)]
#[path = "fault_boundary_test.rs"]
mod fault_boundary_test;

use std::convert::Infallible;
use std::fmt::{Debug, Display};

use leptos::prelude::*;

/// Captured render fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaultRecord {
    /// String form of the error, shown to the user.
    pub message: String,
    /// Debug form of the error, logged only.
    pub detail: String,
}

impl FaultRecord {
    pub fn from_error<E: Display + Debug + ?Sized>(err: &E) -> Self {
        Self { message: err.to_string(), detail: format!("{err:?}") }
    }
}

/// Two-state supervisor. `Faulted` is terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FaultState {
    #[default]
    Normal,
    Faulted(FaultRecord),
}

impl FaultState {
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }

    #[must_use]
    pub fn fault(&self) -> Option<&FaultRecord> {
        match self {
            Self::Normal => None,
            Self::Faulted(record) => Some(record),
        }
    }

    /// Latch `record`. Returns `true` only for the Normal→Faulted transition;
    /// later faults are ignored.
    pub fn record(&mut self, record: FaultRecord) -> bool {
        if self.is_faulted() {
            return false;
        }
        report(&record);
        *self = Self::Faulted(record);
        true
    }

    /// Run `render` while Normal and substitute `fallback` once Faulted. An
    /// `Err` from `render` latches the fault first. Once Faulted, `render`
    /// is not run again.
    pub fn supervise<T, E, R, F>(&mut self, render: R, fallback: F) -> T
    where
        E: Display + Debug,
        R: FnOnce() -> Result<T, E>,
        F: FnOnce(&FaultRecord) -> T,
    {
        if let Self::Faulted(record) = self {
            return fallback(record);
        }
        match render() {
            Ok(value) => value,
            Err(err) => {
                let record = FaultRecord::from_error(&err);
                self.record(record.clone());
                fallback(&record)
            }
        }
    }
}

fn report(record: &FaultRecord) {
    log::error!("render fault contained: {}", record.message);
    log::error!("render fault detail: {}", record.detail);
}

/// Contain render faults in `children`, replacing the subtree with the
/// circuit breaker screen after the first one.
///
/// `state` lets a caller share the latch across boundary instances; by
/// default each boundary owns its own.
#[component]
pub fn FaultBoundary(
    children: ChildrenFn,
    #[prop(optional)] state: Option<RwSignal<FaultState>>,
) -> impl IntoView {
    let fault = state.unwrap_or_else(|| RwSignal::new(FaultState::Normal));

    move || {
        fault.get().supervise(
            || {
                let children = children.clone();
                Ok::<_, Infallible>(
                    view! {
                        <ErrorBoundary fallback=move |errors| {
                            let record = errors
                                .get_untracked()
                                .into_iter()
                                .next()
                                .map(|(_, err)| FaultRecord::from_error(&err))
                                .unwrap_or_else(|| FaultRecord {
                                    message: "unknown render fault".to_owned(),
                                    detail: String::new(),
                                });
                            let latched = record.clone();
                            fault.maybe_update(move |state| state.record(latched));
                            view! { <CircuitBreaker record=record /> }
                        }>
                            {children()}
                        </ErrorBoundary>
                    }
                    .into_any(),
                )
            },
            |record| view! { <CircuitBreaker record=record.clone() /> }.into_any(),
        )
    }
}

/// Static recovery screen with a full-restart action.
#[component]
pub fn CircuitBreaker(record: FaultRecord) -> impl IntoView {
    view! {
        <div class="circuit-breaker" role="alert">
            <h1 class="circuit-breaker__title">"Circuit Breaker"</h1>
            <p class="circuit-breaker__lead">"Something went wrong while rendering this page."</p>
            <pre class="circuit-breaker__error">{record.message}</pre>
            <button class="btn circuit-breaker__restart" on:click=move |_| restart_app()>
                "Restart"
            </button>
        </div>
    }
}

/// Full page reload; discards every piece of in-memory state.
fn restart_app() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("restart failed: {e:?}");
            }
        }
    }
}
