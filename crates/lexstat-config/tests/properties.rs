//! Property-based tests for lexstat-config serialization.

use lexstat_config::{OutputFormat, Profile, UserConfig};
use proptest::prelude::*;

const OUTPUT_FORMATS: [OutputFormat; 2] = [OutputFormat::Md, OutputFormat::Json];

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        prop::option::of(prop::sample::select(OUTPUT_FORMATS.to_vec())),
        prop::option::of("[a-z./]{1,24}"),
        prop::option::of(prop::collection::vec("\\.?[a-z]{1,5}", 0..4)),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(0usize..1_000_000),
    )
        .prop_map(
            |(format, store, extensions, include_hidden, respect_ignore, follow_links, max_file_bytes)| {
                Profile {
                    format,
                    store,
                    extensions,
                    include_hidden,
                    respect_ignore,
                    follow_links,
                    max_file_bytes,
                }
            },
        )
}

proptest! {
    #[test]
    fn output_format_roundtrip(format in prop::sample::select(OUTPUT_FORMATS.to_vec())) {
        let json = serde_json::to_string(&format).expect("serialize");
        let parsed: OutputFormat = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(format, parsed);
    }

    #[test]
    fn profile_roundtrip(profile in arb_profile()) {
        let json = serde_json::to_string(&profile).expect("serialize");
        let parsed: Profile = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(profile, parsed);
    }

    #[test]
    fn named_profile_lookup_matches_map(
        profiles in prop::collection::btree_map("[a-z]{1,8}", arb_profile(), 0..5),
        name in "[a-z]{1,8}",
    ) {
        let config = UserConfig { profiles: profiles.clone() };
        prop_assert_eq!(config.profile(Some(name.as_str())), profiles.get(&name));
        prop_assert_eq!(config.profile(None), profiles.get("default"));
    }
}

#[test]
fn output_format_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&OutputFormat::Md).unwrap(), "\"md\"");
    assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
}
