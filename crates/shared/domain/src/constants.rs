//! Domain-level constants.

// =============================================================================
// Messages
// =============================================================================

/// Body returned whenever an id lookup matches no user
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

// =============================================================================
// Seed data
// =============================================================================

/// Users loaded into a fresh store, in sequence order.
///
/// Id 4 appears twice; lookups resolve to the first of the pair.
pub const SEED_USERS: &[(i64, &str)] = &[
    (1, "Adrian"),
    (2, "Daniel"),
    (3, "Marcos"),
    (4, "Richard"),
    (4, "Rolfi"),
];
