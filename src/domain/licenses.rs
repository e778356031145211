/// Licenses offered by the questionnaire, in display order, with the
/// shields.io badge slug rendered next to the title. `None` has no badge.
pub const LICENSES: &[(&str, Option<&str>)] = &[
    ("MIT", Some("MIT-yellow")),
    ("Apache-2.0", Some("Apache_2.0-blue")),
    ("GPL-3.0", Some("GPL_3.0-red")),
    ("BSD-3-Clause", Some("BSD_3--Clause-orange")),
    ("None", None),
];

pub const DEFAULT_LICENSE: &str = "MIT";

/// Id that renders the "not currently licensed" text.
pub const UNLICENSED: &str = "None";

pub fn license_ids() -> Vec<String> {
    LICENSES.iter().map(|(id, _)| id.to_string()).collect()
}

pub fn is_known_license(id: &str) -> bool {
    LICENSES.iter().any(|(known, _)| *known == id)
}

pub fn badge_slug(id: &str) -> Option<&'static str> {
    LICENSES
        .iter()
        .find(|(known, _)| *known == id)
        .and_then(|(_, badge)| *badge)
}
