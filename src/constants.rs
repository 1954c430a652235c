// Platform tags – these are the single source of truth for the stock partitions
pub const PLATFORM_FACEBOOK: &str = "facebook";
pub const PLATFORM_TWITTER: &str = "twitter";
pub const DEFAULT_PLATFORMS: [&str; 2] = [PLATFORM_FACEBOOK, PLATFORM_TWITTER];
