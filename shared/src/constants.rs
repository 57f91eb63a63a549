// Keys of the three independently persisted entries. These match the
// storage layout of earlier deployments, so changing them orphans data.
pub const SEGMENTS_KEY: &str = "spinwheel_segments";
pub const LEADS_KEY: &str = "spinwheel_leads";
pub const HAS_SPUN_KEY: &str = "spinwheel_has_spun";

// Static shared secret for the operator view. A convenience gate, not a
// security boundary.
pub const ADMIN_PIN: &str = "1234";

pub const NAME_REQUIRED_ERROR: &str = "Name is required";
pub const NAME_TOO_SHORT_ERROR: &str = "Name must be at least 2 characters";
pub const PHONE_REQUIRED_ERROR: &str = "Phone number is required";
pub const INVALID_PHONE_ERROR: &str = "Please enter a valid phone number";
pub const EMAIL_REQUIRED_ERROR: &str = "Email is required";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const INCORRECT_PIN_ERROR: &str = "Incorrect PIN";

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MAX_PRIZE_NAME_LENGTH: usize = 30;
