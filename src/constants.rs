// API URLs
// Default fallback URL for the portal backend. Prefer environment variables.
pub const SERVER_API_URL: &str = "http://localhost:3000/api";

// Session storage keys
// The profile entry holds the serialized UserProfile JSON next to the token.
pub const TOKEN_KEY: &str = "com.universityportal.auth.token.v1";
pub const PROFILE_KEY: &str = "com.universityportal.auth.profile.v1";

// Service name for OS keyring entries
pub const KEYRING_SERVICE_NAME: &str = "universityportal";

// Storage mode configuration
// Development: in-memory session storage. Production: OS keyring.
pub const USE_SESSION_STORAGE: bool = cfg!(debug_assertions);

// Pagination defaults matching the backend's list endpoints
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_SORT: &str = "-createdAt";
