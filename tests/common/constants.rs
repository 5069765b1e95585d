//! Shared constants for end-to-end tests

// ============================================================================
// Fake Backend Data
// ============================================================================

/// User id the fake backend knows about
pub const KNOWN_USER_ID: u64 = 1;

/// User id the fake backend answers with 404 Not Found
pub const MISSING_USER_ID: u64 = 99;

/// Content id whose response body is not JSON
pub const GARBLED_CONTENT_ID: u64 = 13;

/// Content id the fake backend answers with 503 Service Unavailable
pub const UNAVAILABLE_CONTENT_ID: u64 = 503;

/// Username the fake backend rejects with 409 Conflict
pub const TAKEN_USERNAME: &str = "taken";

// ============================================================================
// Test Timeouts
// ============================================================================

/// Upper bound for any single submission to settle (milliseconds)
pub const SETTLE_TIMEOUT_MS: u64 = 5000;
