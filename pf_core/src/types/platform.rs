pub const DEFAULT_PLATFORM: &str = "instagram";
pub const DEFAULT_TONE: &str = "default";

/// Platforms the system instruction has style rules for.
pub const KNOWN_PLATFORMS: [&str; 5] = ["instagram", "twitter", "linkedin", "tiktok", "facebook"];

/// Tones the system instruction has style rules for, plus the neutral default.
pub const KNOWN_TONES: [&str; 6] = [
    "default",
    "professional",
    "casual",
    "funny",
    "inspirational",
    "trendy",
];

pub fn is_known_platform(platform: &str) -> bool {
    KNOWN_PLATFORMS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(platform))
}

pub fn is_known_tone(tone: &str) -> bool {
    KNOWN_TONES.iter().any(|t| t.eq_ignore_ascii_case(tone))
}

/// Trims a form value and substitutes `default` when nothing is left.
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
