// Domain types and value objects
pub mod booking;
pub mod graph;
pub mod role;
pub mod station;

// Re-export commonly used types
pub use booking::{
    Booking, BookingReceipt, BookingRequest, BookingStatus, PathResult, ProcessOutcome,
    ProcessedBooking, RouteQuery, RouteQueryResult,
};
pub use graph::{GraphError, GraphModel};
pub use role::ViewRole;
pub use station::{EdgeKey, Route, Station, StationId};
