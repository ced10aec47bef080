//! Booking-service connection constants.

/// Endpoint paths exposed by the booking service
pub struct Endpoints {
    /// Liveness probe (also returns the station list)
    pub stations: &'static str,
    pub pending_bookings: &'static str,
    pub completed_bookings: &'static str,
    pub add_booking: &'static str,
    pub find_route: &'static str,
    /// Always targets the queue head; no body
    pub process_booking: &'static str,
}

/// Default values for the Http Client. No request timeout is set.
pub struct ClientDefaults {
    pub user_agent: &'static str,
}

/// The Master Network Configuration
pub struct NetworkConfig {
    pub base_url: &'static str,
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
    /// Cadence of the probe-then-sync poll cycle
    pub poll_interval_ms: u64,
}

pub const NETWORK: NetworkConfig = NetworkConfig {
    base_url: "http://localhost:8080",
    endpoints: Endpoints {
        stations: "/stations",
        pending_bookings: "/pendingBookings",
        completed_bookings: "/completedBookings",
        add_booking: "/addBooking",
        find_route: "/findRoute",
        process_booking: "/processBooking",
    },
    client: ClientDefaults {
        user_agent: concat!("rail-console/", env!("CARGO_PKG_VERSION")),
    },
    poll_interval_ms: 5_000,
};
