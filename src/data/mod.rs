// Remote service access and local session markers
pub mod http;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use http::HttpBookingService;
pub use service::{BookingService, RemoteStation, ServiceError};
pub use session::{SessionMarker, clear_session, load_session, save_session, session_role};
