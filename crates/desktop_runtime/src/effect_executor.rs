//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::time::Duration;

use leptos::*;

use crate::{
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ScheduleOpenSettle {
            window_id,
            delay_ms,
        } => schedule(runtime, DesktopAction::SettleOpen { window_id }, delay_ms),
        RuntimeEffect::ScheduleCloseFinalize {
            window_id,
            delay_ms,
        } => schedule(runtime, DesktopAction::FinalizeClose { window_id }, delay_ms),
        content @ (RuntimeEffect::MountContent { .. } | RuntimeEffect::UnmountContent { .. }) => {
            if let Some(on_effect) = runtime.on_effect {
                on_effect.call(content);
            }
        }
    }
}

fn schedule(runtime: DesktopRuntimeContext, action: DesktopAction, delay_ms: u64) {
    set_timeout(
        move || runtime.dispatch_action(action),
        Duration::from_millis(delay_ms),
    );
}
