pub mod animator;
pub mod context;
pub mod controller;
pub mod monitor;
pub mod requests;
pub mod sync;

// Re-export key components
pub use animator::{AnimationHandle, PathAnimator};
pub use context::{AppContext, resolve_role};
pub use controller::{FollowUp, Notice, NoticeLevel, PollOutcome, RailController, run_poll_cycle};
pub use monitor::{Connectivity, ConnectivityMonitor, PollTimer};
pub use requests::{BookingForm, RouteForm, RouteKind, RouteResultView, ValidationError};
pub use sync::{BookingSnapshot, BookingView, ListEntry, SyncController};
