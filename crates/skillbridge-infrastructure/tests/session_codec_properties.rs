//! Persist -> rehydrate laws for arbitrary session snapshots.

use proptest::prelude::*;

use skillbridge_core::session::{
    AppearanceSettings, FontSize, NotificationSettings, PrivacySettings, ProfileVisibility,
    SessionRepository, SessionState, Theme, User, UserSettings,
};
use skillbridge_infrastructure::dto::{decode_session, encode_session};
use skillbridge_infrastructure::{BlobSessionRepository, MemoryBlobStorage};

// -- Strategy helpers --

fn arb_opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(".{0,24}")
}

fn arb_visibility() -> impl Strategy<Value = ProfileVisibility> {
    prop_oneof![
        Just(ProfileVisibility::Public),
        Just(ProfileVisibility::Private),
        Just(ProfileVisibility::Friends),
    ]
}

fn arb_theme() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark), Just(Theme::System)]
}

fn arb_font_size() -> impl Strategy<Value = FontSize> {
    prop_oneof![
        Just(FontSize::Small),
        Just(FontSize::Medium),
        Just(FontSize::Large),
    ]
}

// -- Arbitrary types --

fn arb_user() -> impl Strategy<Value = User> {
    (
        ("[a-z0-9-]{1,12}", "[a-z]{1,8}@[a-z]{1,8}\\.com", ".{0,24}"),
        (
            arb_opt_text(),
            arb_opt_text(),
            arb_opt_text(),
            arb_opt_text(),
            arb_opt_text(),
        ),
        prop::collection::btree_set("[a-z0-9-]{1,10}", 0..4),
        prop::option::of("[a-z-]{1,20}"),
        prop::collection::btree_map("[a-z0-9-]{1,10}", any::<u32>(), 0..6),
    )
        .prop_map(
            |(
                (id, email, name),
                (avatar, bio, location, company, website),
                completed_courses,
                current_path,
                progress,
            )| User {
                id,
                email,
                name,
                avatar,
                bio,
                location,
                company,
                website,
                completed_courses,
                current_path,
                progress,
            },
        )
}

fn arb_settings() -> impl Strategy<Value = UserSettings> {
    (
        (any::<bool>(), any::<bool>(), any::<bool>()),
        (arb_visibility(), any::<bool>()),
        (arb_theme(), arb_font_size()),
        "[a-z]{2}",
    )
        .prop_map(
            |(
                (email, push, marketing),
                (profile_visibility, show_activity),
                (theme, font_size),
                language,
            )| {
                UserSettings {
                    notifications: NotificationSettings {
                        email,
                        push,
                        marketing,
                    },
                    privacy: PrivacySettings {
                        profile_visibility,
                        show_activity,
                    },
                    appearance: AppearanceSettings { theme, font_size },
                    language,
                }
            },
        )
}

fn arb_session_state() -> impl Strategy<Value = SessionState> {
    (prop::option::of(arb_user()), arb_settings())
        .prop_map(|(user, settings)| SessionState { user, settings })
}

proptest! {
    #[test]
    fn test_decode_inverts_encode(state in arb_session_state()) {
        let blob = encode_session(&state).unwrap();
        prop_assert_eq!(decode_session(&blob).unwrap(), state);
    }

    #[test]
    fn test_stored_flag_tracks_user(state in arb_session_state()) {
        let blob = encode_session(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        prop_assert_eq!(value["isAuthenticated"].as_bool(), Some(state.user.is_some()));
    }

    #[test]
    fn test_repository_rehydrates_last_save(
        first in arb_session_state(),
        second in arb_session_state(),
    ) {
        let repo = BlobSessionRepository::new(MemoryBlobStorage::new());
        repo.save(&first).unwrap();
        repo.save(&second).unwrap();
        prop_assert_eq!(repo.load().unwrap(), Some(second));
    }
}
