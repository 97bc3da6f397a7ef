use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every column a launch monitor export can be mapped onto.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    SessionId,
    Timestamp,
    Club,
    ClubType,
    SwingCount,
    ClubSpeed,
    AttackAngle,
    ClubPath,
    FaceAngle,
    FaceToPath,
    DynamicLoft,
    SpinLoft,
    BallSpeed,
    SmashFactor,
    LaunchAngle,
    LaunchDirection,
    Backspin,
    Sidespin,
    SpinRate,
    SpinRateType,
    SpinAxis,
    ApexHeight,
    DescentAngle,
    HangTime,
    CarryDistance,
    CarryDeviationAngle,
    CarryDeviationDistance,
    TotalDistance,
    TotalDeviationAngle,
    TotalDeviationDistance,
}

impl CanonicalField {
    /// Club name and club type both identify the club column.
    pub fn is_club(self) -> bool {
        matches!(self, Self::Club | Self::ClubType)
    }
}

/// Normalized header label -> canonical field.
/// Keys are already in [`normalize_label`] form.
const ALIASES: &[(&str, CanonicalField)] = &[
    // Identity
    ("session", CanonicalField::SessionId),
    ("session id", CanonicalField::SessionId),
    ("session name", CanonicalField::SessionId),
    ("date", CanonicalField::Timestamp),
    ("time", CanonicalField::Timestamp),
    ("date time", CanonicalField::Timestamp),
    ("datetime", CanonicalField::Timestamp),
    ("timestamp", CanonicalField::Timestamp),
    ("time stamp", CanonicalField::Timestamp),
    ("shot time", CanonicalField::Timestamp),
    ("club", CanonicalField::Club),
    ("club name", CanonicalField::Club),
    ("clubname", CanonicalField::Club),
    ("club type", CanonicalField::ClubType),
    ("clubtype", CanonicalField::ClubType),
    ("swing count", CanonicalField::SwingCount),
    ("swing number", CanonicalField::SwingCount),
    ("shot number", CanonicalField::SwingCount),
    ("shot no", CanonicalField::SwingCount),
    // Swing
    ("club speed", CanonicalField::ClubSpeed),
    ("club head speed", CanonicalField::ClubSpeed),
    ("clubhead speed", CanonicalField::ClubSpeed),
    ("club spd", CanonicalField::ClubSpeed),
    ("attack angle", CanonicalField::AttackAngle),
    ("angle of attack", CanonicalField::AttackAngle),
    ("aoa", CanonicalField::AttackAngle),
    ("club path", CanonicalField::ClubPath),
    ("swing path", CanonicalField::ClubPath),
    ("path", CanonicalField::ClubPath),
    ("face angle", CanonicalField::FaceAngle),
    ("club face", CanonicalField::FaceAngle),
    ("club face angle", CanonicalField::FaceAngle),
    ("face to target", CanonicalField::FaceAngle),
    ("face to path", CanonicalField::FaceToPath),
    ("ftp", CanonicalField::FaceToPath),
    ("dynamic loft", CanonicalField::DynamicLoft),
    ("spin loft", CanonicalField::SpinLoft),
    // Ball
    ("ball speed", CanonicalField::BallSpeed),
    ("ball spd", CanonicalField::BallSpeed),
    ("smash factor", CanonicalField::SmashFactor),
    ("smash", CanonicalField::SmashFactor),
    // Launch
    ("launch angle", CanonicalField::LaunchAngle),
    ("vertical launch", CanonicalField::LaunchAngle),
    ("launch v", CanonicalField::LaunchAngle),
    ("vla", CanonicalField::LaunchAngle),
    ("launch direction", CanonicalField::LaunchDirection),
    ("launch dir", CanonicalField::LaunchDirection),
    ("horizontal launch", CanonicalField::LaunchDirection),
    ("launch h", CanonicalField::LaunchDirection),
    ("hla", CanonicalField::LaunchDirection),
    ("backspin", CanonicalField::Backspin),
    ("back spin", CanonicalField::Backspin),
    ("sidespin", CanonicalField::Sidespin),
    ("side spin", CanonicalField::Sidespin),
    ("spin rate", CanonicalField::SpinRate),
    ("spin", CanonicalField::SpinRate),
    ("total spin", CanonicalField::SpinRate),
    ("spin rate type", CanonicalField::SpinRateType),
    ("spin type", CanonicalField::SpinRateType),
    ("spin axis", CanonicalField::SpinAxis),
    ("axis", CanonicalField::SpinAxis),
    ("apex height", CanonicalField::ApexHeight),
    ("apex", CanonicalField::ApexHeight),
    ("peak height", CanonicalField::ApexHeight),
    ("max height", CanonicalField::ApexHeight),
    ("height", CanonicalField::ApexHeight),
    ("descent angle", CanonicalField::DescentAngle),
    ("land angle", CanonicalField::DescentAngle),
    ("landing angle", CanonicalField::DescentAngle),
    ("hang time", CanonicalField::HangTime),
    ("flight time", CanonicalField::HangTime),
    // Distance
    ("carry distance", CanonicalField::CarryDistance),
    ("carry dist", CanonicalField::CarryDistance),
    ("carry", CanonicalField::CarryDistance),
    ("carry deviation angle", CanonicalField::CarryDeviationAngle),
    ("carry dev angle", CanonicalField::CarryDeviationAngle),
    ("carry deviation distance", CanonicalField::CarryDeviationDistance),
    ("carry deviation", CanonicalField::CarryDeviationDistance),
    ("carry dev distance", CanonicalField::CarryDeviationDistance),
    ("carry lateral", CanonicalField::CarryDeviationDistance),
    ("carry side", CanonicalField::CarryDeviationDistance),
    ("total distance", CanonicalField::TotalDistance),
    ("total dist", CanonicalField::TotalDistance),
    ("total", CanonicalField::TotalDistance),
    ("total deviation angle", CanonicalField::TotalDeviationAngle),
    ("total dev angle", CanonicalField::TotalDeviationAngle),
    ("total deviation distance", CanonicalField::TotalDeviationDistance),
    ("total deviation", CanonicalField::TotalDeviationDistance),
    ("total dev distance", CanonicalField::TotalDeviationDistance),
    ("total lateral", CanonicalField::TotalDeviationDistance),
    ("total side", CanonicalField::TotalDeviationDistance),
];

fn alias_map() -> &'static HashMap<&'static str, CanonicalField> {
    static MAP: OnceLock<HashMap<&'static str, CanonicalField>> = OnceLock::new();
    MAP.get_or_init(|| ALIASES.iter().copied().collect())
}

/// Folds a raw header label into the form the alias table is keyed by.
///
/// `"ClubSpeed [mph]"`, `"club speed (mph)"` and `"Club_Speed"` all become
/// `"club speed"`.
pub fn normalize_label(raw: &str) -> String {
    let stripped = strip_annotations(raw);
    let split = split_camel_case(&stripped);

    let mut out = String::with_capacity(split.len());
    let mut pending_space = false;
    for c in split.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Maps a raw label straight to its canonical field.
pub fn lookup(raw: &str) -> Option<CanonicalField> {
    let key = normalize_label(raw);
    if key.is_empty() {
        return None;
    }
    alias_map().get(key.as_str()).copied()
}

/// Canonical labels shown to the user when nothing could be mapped.
pub fn expected_columns() -> Vec<String> {
    [
        "Club",
        "Club Speed",
        "Ball Speed",
        "Launch Angle",
        "Spin Rate",
        "Carry Distance",
        "Total Distance",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn strip_annotations(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn split_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "clubSpeed" and the tail of "HLASpin" both start a new word
            if prev.is_lowercase() || (prev.is_uppercase() && next_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_units_and_splits_camel_case() {
        assert_eq!(normalize_label("ClubSpeed [mph]"), "club speed");
        assert_eq!(normalize_label("  Carry  Dist. (yds)"), "carry dist");
        assert_eq!(normalize_label("Spin_Rate"), "spin rate");
        assert_eq!(normalize_label("HLA"), "hla");
    }

    #[test]
    fn every_field_has_an_alias() {
        use strum::IntoEnumIterator;
        for field in CanonicalField::iter() {
            assert!(
                ALIASES.iter().any(|(_, f)| *f == field),
                "{} has no alias",
                field
            );
            let name: &'static str = field.into();
            assert_eq!(name.parse::<CanonicalField>().ok(), Some(field));
        }
    }

    #[test]
    fn alias_keys_are_normalized() {
        for (key, _) in ALIASES {
            assert_eq!(&normalize_label(key), key, "alias '{}' is not normalized", key);
        }
    }
}
