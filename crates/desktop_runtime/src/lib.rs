//! Window manager and shell runtime for a browser desktop.
//!
//! The pure core ([`window_manager`], [`reducer`], [`taskbar`], [`start_menu`]) is testable
//! without a browser. [`components`] renders it with Leptos.

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod error;
pub mod interaction;
pub mod model;
pub mod placement;
pub mod reducer;
mod runtime_context;
pub mod shared;
pub mod start_menu;
pub mod taskbar;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::ShellConfig;
pub use error::DesktopError;
pub use interaction::{HitTarget, PointerGrab};
pub use model::*;
pub use placement::{FixedJitter, LayoutJitter, SeededJitter};
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, DesktopView, RuntimeEffect};
pub use shared::SharedDesktop;
pub use window_manager::WindowManager;
