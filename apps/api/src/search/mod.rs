// Search flow: URL params → query adapter (role-dependent) → display records.
// The page and the JSON API share the same adapter; only the output differs.

pub mod adapter;
pub mod display;
pub mod handlers;
pub mod params;
