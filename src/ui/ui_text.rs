/// Every user-visible string of the console, in one place.
#[derive(Clone, Copy)]
pub struct UiText {
    pub window_title: &'static str,

    // Connectivity banner
    pub status_connected: &'static str,
    pub status_disconnected: &'static str,
    pub status_unknown: &'static str,

    // Header bar
    pub role_label: &'static str,
    pub logout_button: &'static str,
    pub last_synced_prefix: &'static str,

    // Admin stats and queue
    pub stats_pending_label: &'static str,
    pub stats_completed_label: &'static str,
    pub stats_stations_label: &'static str,
    pub queue_heading: &'static str,
    pub process_button: &'static str,
    pub processing_button: &'static str,
    pub admin_empty_state: &'static str,
    pub pending_header: &'static str,
    pub pending_header_suffix: &'static str,
    pub completed_header: &'static str,
    pub completed_header_suffix: &'static str,
    pub status_pending_badge: &'static str,
    pub status_completed_badge: &'static str,
    pub queued_at_label: &'static str,

    // Passenger tickets
    pub tickets_header: &'static str,
    pub tickets_empty_state: &'static str,
    pub ticket_confirmed_badge: &'static str,

    // Booking form
    pub booking_heading: &'static str,
    pub passenger_name_label: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    pub select_station_placeholder: &'static str,
    pub submit_booking_button: &'static str,
    pub submitting_button: &'static str,

    // Route form and results
    pub route_heading: &'static str,
    pub find_route_button: &'static str,
    pub searching_button: &'static str,
    pub fastest_title: &'static str,
    pub cheapest_title: &'static str,
    pub fastest_title_short: &'static str,
    pub cheapest_title_short: &'static str,
    pub total_time_prefix: &'static str,
    pub total_cost_prefix: &'static str,
    pub minutes_suffix: &'static str,
    pub no_route_available: &'static str,
    pub replay_hint: &'static str,
    pub route_error_prefix: &'static str,

    // Notices
    pub notices_heading: &'static str,
    pub dismiss_button: &'static str,
    pub booking_added_prefix: &'static str,
    pub booking_added_suffix: &'static str,
    pub booking_failed_prefix: &'static str,
    pub process_failed_prefix: &'static str,
    pub confirmed_title: &'static str,
    pub booking_id_label: &'static str,
    pub passenger_label: &'static str,

    // Map
    pub map_heading: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Rail Console - Routes & Bookings",

    status_connected: "✅ Connected to booking service",
    status_disconnected: "❌ Booking service offline",
    status_unknown: "⏳ Checking connection…",

    role_label: "Role",
    logout_button: "Logout",
    last_synced_prefix: "Last sync",

    stats_pending_label: "Pending",
    stats_completed_label: "Completed",
    stats_stations_label: "Stations",
    queue_heading: "Booking Queue",
    process_button: "✅ Process Now",
    processing_button: "Processing…",
    admin_empty_state: "No bookings yet",
    pending_header: "Pending bookings",
    pending_header_suffix: "in queue",
    completed_header: "Confirmed bookings",
    completed_header_suffix: "processed",
    status_pending_badge: "PENDING",
    status_completed_badge: "COMPLETED",
    queued_at_label: "Queued at (UTC)",

    tickets_header: "Confirmed tickets",
    tickets_empty_state: "No confirmed tickets",
    ticket_confirmed_badge: "CONFIRMED",

    booking_heading: "Book a Ticket",
    passenger_name_label: "Passenger name",
    from_label: "From",
    to_label: "To",
    select_station_placeholder: "Select station",
    submit_booking_button: "Add Booking",
    submitting_button: "Submitting…",

    route_heading: "Find Route",
    find_route_button: "Find Route",
    searching_button: "Searching…",
    fastest_title: "⚡ Fastest Route",
    cheapest_title: "💰 Cheapest Route",
    fastest_title_short: "Fastest",
    cheapest_title_short: "Cheapest",
    total_time_prefix: "Total time:",
    total_cost_prefix: "Total cost:",
    minutes_suffix: "minutes",
    no_route_available: "No route available",
    replay_hint: "Click a route to replay it on the map",
    route_error_prefix: "Error finding route:",

    notices_heading: "Notices",
    dismiss_button: "Dismiss",
    booking_added_prefix: "Booking added to queue! ID:",
    booking_added_suffix: "Status: pending (awaiting admin processing)",
    booking_failed_prefix: "Error adding booking:",
    process_failed_prefix: "Error processing booking:",
    confirmed_title: "✅ Booking confirmed!",
    booking_id_label: "Booking ID:",
    passenger_label: "Passenger:",

    map_heading: "Network Map",
};
