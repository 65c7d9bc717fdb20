//! Fixed reference data: the city catalog and the corridor labels.
//!
//! Both are supplied as constants and shared read-only by every component.
//! Corridors are plain integer labels with no lifecycle of their own.

/// Integer label of a transit corridor, in `1..=CORRIDOR_COUNT`.
pub type Corridor = u8;

/// Number of corridors on the board.
pub const CORRIDOR_COUNT: usize = 10;

/// Every corridor label, in display order.
pub const ALL_CORRIDORS: [Corridor; CORRIDOR_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// The full announcement catalog, in board display order (13 rows of 5).
pub const CITIES: [&str; 65] = [
    "Amsterdam",
    "Bishkek",
    "Houston",
    "Milan",
    "Singapore",
    "Ankara",
    "Bologna",
    "Kathmandu",
    "Montreal",
    "Stockholm",
    "Ashgabat",
    "Bombay",
    "Kiev",
    "Moscow",
    "Stuttgart",
    "Baghdad",
    "Boston",
    "Lagos",
    "Munich",
    "Sydney",
    "Bahrain",
    "Bremen",
    "Lisbon",
    "Paris",
    "Tashkent",
    "Baku",
    "Budapest",
    "London",
    "Phuket",
    "Tokyo",
    "Bangkok",
    "Dallas",
    "Lyon",
    "Porto",
    "Toronto",
    "Basel",
    "Delhi",
    "Madrid",
    "Prague",
    "Tunis",
    "Batumi",
    "Doha",
    "Malaga",
    "Riyadh",
    "Valencia",
    "Beirut",
    "Dubai",
    "Malta",
    "Rotterdam",
    "Venice",
    "Belgrade",
    "Dublin",
    "Manchester",
    "Salzburg",
    "Vienna",
    "Berlin",
    "Hamburg",
    "Melbourne",
    "Santiago",
    "Zagreb",
    "Bilbao",
    "Havana",
    "Miami",
    "Shanghai",
    "Zurich",
];
