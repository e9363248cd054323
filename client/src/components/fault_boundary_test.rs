use super::*;

#[derive(Debug)]
struct RenderError(&'static str);

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render failed: {}", self.0)
    }
}

impl std::error::Error for RenderError {}

#[test]
fn starts_normal() {
    let state = FaultState::default();
    assert!(!state.is_faulted());
    assert_eq!(state.fault(), None);
}

fn breaker(record: &FaultRecord) -> String {
    format!("breaker: {}", record.message)
}

#[test]
fn supervise_passes_through_success() {
    let mut state = FaultState::Normal;
    let out = state.supervise(|| Ok::<_, RenderError>("page".to_owned()), breaker);
    assert_eq!(out, "page");
    assert_eq!(state, FaultState::Normal);
}

#[test]
fn supervise_latches_string_form_of_error() {
    let mut state = FaultState::Normal;
    let out = state.supervise(|| Err(RenderError("menu")), breaker);

    assert_eq!(out, "breaker: render failed: menu");
    let record = state.fault().unwrap();
    assert_eq!(record.message, "render failed: menu");
    assert_eq!(record.detail, "RenderError(\"menu\")");
}

#[test]
fn faulted_state_does_not_rerun_children() {
    let mut state = FaultState::Normal;
    let _ = state.supervise(|| Err(RenderError("first")), breaker);

    let mut ran = false;
    let out = state.supervise(
        || {
            ran = true;
            Ok::<_, RenderError>("page".to_owned())
        },
        breaker,
    );
    assert!(!ran);
    assert_eq!(out, "breaker: render failed: first");
}

#[test]
fn first_fault_wins() {
    let mut state = FaultState::Normal;
    assert!(state.record(FaultRecord::from_error(&RenderError("first"))));
    assert!(!state.record(FaultRecord::from_error(&RenderError("second"))));
    assert_eq!(state.fault().unwrap().message, "render failed: first");
}

#[test]
fn fresh_state_after_restart_is_normal() {
    let mut state = FaultState::Normal;
    let _ = state.supervise(|| Err(RenderError("boom")), breaker);
    assert!(state.is_faulted());

    // A restart rebuilds every piece of state from scratch.
    let mut restarted = FaultState::default();
    assert_eq!(restarted.supervise(|| Ok::<_, RenderError>("page".to_owned()), breaker), "page");
}

#[test]
fn record_from_str_error() {
    let record = FaultRecord::from_error("plain message");
    assert_eq!(record.message, "plain message");
    assert_eq!(record.detail, "\"plain message\"");
}

// =============================================================================
// Component rendering
// =============================================================================

#[cfg(feature = "ssr")]
mod render {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leptos::prelude::*;

    use super::RenderError;
    use crate::components::fault_boundary::{FaultBoundary, FaultState};

    #[test]
    fn healthy_children_render_normally() {
        let html = Owner::new().with(|| {
            view! {
                <FaultBoundary>
                    <p>"menu ok"</p>
                </FaultBoundary>
            }
            .to_html()
        });
        assert!(html.contains("menu ok"));
        assert!(!html.contains("Circuit Breaker"));
    }

    #[test]
    fn erroring_child_renders_circuit_breaker_with_message() {
        let html = Owner::new().with(|| {
            view! {
                <FaultBoundary>
                    {|| Err::<String, _>(RenderError("menu exploded"))}
                </FaultBoundary>
            }
            .to_html()
        });
        assert!(html.contains("Circuit Breaker"));
        assert!(html.contains("render failed: menu exploded"));
        assert!(html.contains("Restart"));
    }

    #[test]
    fn fault_is_latched_and_later_renders_keep_the_fallback() {
        Owner::new().with(|| {
            let state = RwSignal::new(FaultState::Normal);

            let first = view! {
                <FaultBoundary state=state>
                    {|| Err::<String, _>(RenderError("menu exploded"))}
                </FaultBoundary>
            }
            .to_html();
            assert!(first.contains("Circuit Breaker"));
            assert_eq!(
                state.get_untracked().fault().map(|r| r.message.clone()),
                Some("render failed: menu exploded".to_owned())
            );

            let renders = Arc::new(AtomicUsize::new(0));
            let counter = renders.clone();
            let second = view! {
                <FaultBoundary state=state>
                    {
                        counter.fetch_add(1, Ordering::SeqCst);
                        "menu ok"
                    }
                </FaultBoundary>
            }
            .to_html();
            assert!(second.contains("Circuit Breaker"));
            assert!(second.contains("render failed: menu exploded"));
            assert!(!second.contains("menu ok"));
            assert_eq!(renders.load(Ordering::SeqCst), 0);
        });
    }
}
