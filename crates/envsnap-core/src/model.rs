//! Hardware model identifier resolution.
//!
//! Maps a raw platform-reported model identifier (e.g. `"iPhone17,2"`) to
//! its human-readable marketing name (e.g. `"iPhone 16 Pro Max"`).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Identifier → marketing name pairs.
///
/// Multiple identifiers may map to the same name: hardware variants
/// (regional radios, connectivity tiers) of one retail product.
const MODEL_TABLE: &[(&str, &str)] = &[
    // iPhone 16
    ("iPhone17,1", "iPhone 16 Pro"),
    ("iPhone17,2", "iPhone 16 Pro Max"),
    ("iPhone17,3", "iPhone 16"),
    ("iPhone17,4", "iPhone 16 Plus"),
    // iPhone 15
    ("iPhone16,1", "iPhone 15 Pro"),
    ("iPhone16,2", "iPhone 15 Pro Max"),
    ("iPhone15,4", "iPhone 15"),
    ("iPhone15,5", "iPhone 15 Plus"),
    // iPhone 14
    ("iPhone15,2", "iPhone 14 Pro"),
    ("iPhone15,3", "iPhone 14 Pro Max"),
    ("iPhone14,7", "iPhone 14"),
    ("iPhone14,8", "iPhone 14 Plus"),
    // iPhone 13
    ("iPhone14,2", "iPhone 13 Pro"),
    ("iPhone14,3", "iPhone 13 Pro Max"),
    ("iPhone14,4", "iPhone 13 mini"),
    ("iPhone14,5", "iPhone 13"),
    // iPhone 12
    ("iPhone13,1", "iPhone 12 mini"),
    ("iPhone13,2", "iPhone 12"),
    ("iPhone13,3", "iPhone 12 Pro"),
    ("iPhone13,4", "iPhone 12 Pro Max"),
    // iPhone 11
    ("iPhone12,1", "iPhone 11"),
    ("iPhone12,3", "iPhone 11 Pro"),
    ("iPhone12,5", "iPhone 11 Pro Max"),
    // iPhone XS / XR
    ("iPhone11,2", "iPhone XS"),
    ("iPhone11,4", "iPhone XS Max"),
    ("iPhone11,6", "iPhone XS Max (China)"),
    ("iPhone11,8", "iPhone XR"),
    // iPhone X / 8
    ("iPhone10,1", "iPhone 8"),
    ("iPhone10,2", "iPhone 8 Plus"),
    ("iPhone10,3", "iPhone X"),
    ("iPhone10,4", "iPhone 8"),
    ("iPhone10,5", "iPhone 8 Plus"),
    ("iPhone10,6", "iPhone X"),
    // iPhone SE
    ("iPhone14,6", "iPhone SE (3rd generation)"),
    ("iPhone12,8", "iPhone SE (2nd generation)"),
    ("iPhone8,4", "iPhone SE (1st generation)"),
    // iPad Pro (M-series)
    ("iPad16,3", "iPad Pro 11-inch (M4)"),
    ("iPad16,4", "iPad Pro 11-inch (M4)"),
    ("iPad16,5", "iPad Pro 13-inch (M4)"),
    ("iPad16,6", "iPad Pro 13-inch (M4)"),
    ("iPad14,3", "iPad Pro 11-inch (M2)"),
    ("iPad14,4", "iPad Pro 11-inch (M2)"),
    ("iPad14,5", "iPad Pro 12.9-inch (M2)"),
    ("iPad14,6", "iPad Pro 12.9-inch (M2)"),
    ("iPad13,4", "iPad Pro 11-inch (M1)"),
    ("iPad13,5", "iPad Pro 11-inch (M1)"),
    ("iPad13,6", "iPad Pro 11-inch (M1)"),
    ("iPad13,7", "iPad Pro 11-inch (M1)"),
    ("iPad13,8", "iPad Pro 12.9-inch (M1)"),
    ("iPad13,9", "iPad Pro 12.9-inch (M1)"),
    ("iPad13,10", "iPad Pro 12.9-inch (M1)"),
    ("iPad13,11", "iPad Pro 12.9-inch (M1)"),
    // iPad Air (M-series)
    ("iPad16,1", "iPad Air 11-inch (M2)"),
    ("iPad16,2", "iPad Air 13-inch (M2)"),
    ("iPad14,8", "iPad Air 13-inch (M2)"),
    ("iPad14,9", "iPad Air 13-inch (M2)"),
    ("iPad13,16", "iPad Air (M1)"),
    ("iPad13,17", "iPad Air (M1)"),
    // iPad mini
    ("iPad16,7", "iPad mini (A17 Pro)"),
    ("iPad16,8", "iPad mini (A17 Pro)"),
    ("iPad14,1", "iPad mini (6th generation)"),
    ("iPad14,2", "iPad mini (6th generation)"),
    // iPad (standard)
    ("iPad13,18", "iPad (10th generation)"),
    ("iPad13,19", "iPad (10th generation)"),
    ("iPad12,1", "iPad (9th generation)"),
    ("iPad12,2", "iPad (9th generation)"),
    // Architecture identifiers reported by simulated environments
    ("i386", "Simulator"),
    ("x86_64", "Simulator"),
    ("arm64", "Simulator"),
];

static MODEL_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| MODEL_TABLE.iter().copied().collect());

/// Returns the marketing name for a model identifier, or the identifier
/// itself when it isn't in the lookup table.
///
/// Lookup is exact-match and case-sensitive. Unknown (typically future)
/// hardware degrades to showing the raw identifier rather than failing,
/// so this function is total and never allocates.
pub fn resolve(identifier: &str) -> &str {
    MODEL_MAP.get(identifier).copied().unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        for (identifier, name) in MODEL_TABLE {
            assert_eq!(resolve(identifier), *name);
        }
    }

    #[test]
    fn known_iphone_identifiers() {
        assert_eq!(resolve("iPhone17,2"), "iPhone 16 Pro Max");
        assert_eq!(resolve("iPhone17,1"), "iPhone 16 Pro");
        assert_eq!(resolve("iPhone17,3"), "iPhone 16");
    }

    #[test]
    fn known_ipad_identifiers() {
        assert_eq!(resolve("iPad16,3"), "iPad Pro 11-inch (M4)");
        assert_eq!(resolve("iPad14,1"), "iPad mini (6th generation)");
    }

    #[test]
    fn known_se_identifiers() {
        assert_eq!(resolve("iPhone14,6"), "iPhone SE (3rd generation)");
        assert_eq!(resolve("iPhone12,8"), "iPhone SE (2nd generation)");
    }

    #[test]
    fn simulator_identifiers() {
        assert_eq!(resolve("i386"), "Simulator");
        assert_eq!(resolve("x86_64"), "Simulator");
        assert_eq!(resolve("arm64"), "Simulator");
    }

    #[test]
    fn unknown_identifier_falls_back_to_itself() {
        assert_eq!(resolve("iPhone99,9"), "iPhone99,9");
    }

    #[test]
    fn empty_identifier_falls_back_to_empty() {
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve("iphone17,2"), "iphone17,2");
    }

    #[test]
    fn table_keys_are_unique() {
        let mut keys: Vec<_> = MODEL_TABLE.iter().map(|(id, _)| *id).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MODEL_TABLE.len());
    }
}
