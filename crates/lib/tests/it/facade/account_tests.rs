//! Account creation and session opening through the facade

use crate::helpers::*;

#[test]
fn test_create_account_rejections() {
    let (_dir, facade) = setup_facade();

    assert_eq!(
        facade.create_account("", "p1", "Ana").unwrap_err().reason(),
        "Invalid login."
    );
    assert_eq!(
        facade.create_account("ana", "", "Ana").unwrap_err().reason(),
        "Invalid password."
    );

    facade.create_account("ana", "p1", "Ana").unwrap();
    assert_eq!(
        facade
            .create_account("ana", "p2", "Other")
            .unwrap_err()
            .reason(),
        "An account with this login already exists."
    );
}

#[test]
fn test_open_session_rejections() {
    let (_dir, facade) = setup_facade();
    facade.create_account("ana", "p1", "Ana").unwrap();

    assert_eq!(
        facade.open_session("ana", "nope").unwrap_err().reason(),
        "Invalid login or password."
    );
    assert_eq!(
        facade.open_session("ghost", "p1").unwrap_err().reason(),
        "Invalid login or password."
    );
}

#[test]
fn test_each_login_gets_a_fresh_session() {
    let (_dir, facade) = setup_facade();
    facade.create_account("ana", "p1", "Ana").unwrap();

    let first = facade.open_session("ana", "p1").unwrap();
    let second = facade.open_session("ana", "p1").unwrap();
    assert_ne!(first, second);

    // Both stay valid
    facade.edit_profile(&first, "city", "Recife").unwrap();
    facade.edit_profile(&second, "mood", "calm").unwrap();
    assert_eq!(facade.get_attribute("ana", "city").unwrap(), "Recife");
    assert_eq!(facade.get_attribute("ana", "mood").unwrap(), "calm");
}

#[test]
fn test_unknown_session_rejected_everywhere() {
    let (_dir, facade) = setup_facade();
    with_sessions(&facade, &[("ana", "p1")]);

    for token in ["", "garbage", "00000000-0000-4000-8000-000000000000"] {
        assert_eq!(
            facade.edit_profile(token, "city", "x").unwrap_err().reason(),
            "Invalid session."
        );
        assert_eq!(
            facade.request_friend(token, "ana").unwrap_err().reason(),
            "Invalid session."
        );
        assert_eq!(
            facade.send_message(token, "ana", "oi").unwrap_err().reason(),
            "Invalid session."
        );
        assert_eq!(
            facade.read_next_message(token).unwrap_err().reason(),
            "Invalid session."
        );
    }
}
