//! Friendship request/accept handshake through the facade

use amity::store::FriendRequestOutcome;

use crate::helpers::*;

#[test]
fn test_handshake_is_symmetric() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);

    befriend(&facade, &sessions[0], "ana", &sessions[1], "bia");

    assert!(facade.is_friend("ana", "bia"));
    assert!(facade.is_friend("bia", "ana"));
    assert!(facade.list_friends("ana").logins().contains(&"bia".to_string()));
    assert!(facade.list_friends("bia").logins().contains(&"ana".to_string()));
}

#[test]
fn test_outcomes_reported_by_instance() {
    let (_dir, instance) = setup_instance();
    instance.create_account("ana", "p1", "").unwrap();
    instance.create_account("bia", "p2", "").unwrap();
    let ana = instance.open_session("ana", "p1").unwrap();
    let bia = instance.open_session("bia", "p2").unwrap();

    assert_eq!(
        instance.request_friend(&ana, "bia").unwrap(),
        FriendRequestOutcome::Invited
    );
    assert_eq!(
        instance.request_friend(&bia, "ana").unwrap(),
        FriendRequestOutcome::Confirmed
    );
}

#[test]
fn test_self_request_rejected() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1")]);

    assert_eq!(
        facade.request_friend(&sessions[0], "ana").unwrap_err().reason(),
        "An account cannot add itself as a friend."
    );
}

#[test]
fn test_unknown_peer_rejected() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1")]);

    assert_eq!(
        facade
            .request_friend(&sessions[0], "ghost")
            .unwrap_err()
            .reason(),
        "Account not registered."
    );
}

#[test]
fn test_repeat_invite_rejected() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);

    facade.request_friend(&sessions[0], "bia").unwrap();
    assert_eq!(
        facade.request_friend(&sessions[0], "bia").unwrap_err().reason(),
        "Account is already a friend, waiting for the invite to be accepted."
    );
    assert!(!facade.is_friend("ana", "bia"));
}

#[test]
fn test_request_after_confirmation_rejected() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);
    befriend(&facade, &sessions[0], "ana", &sessions[1], "bia");

    for (session, peer) in [(&sessions[0], "bia"), (&sessions[1], "ana")] {
        assert_eq!(
            facade.request_friend(session, peer).unwrap_err().reason(),
            "Account is already a friend."
        );
    }
}

#[test]
fn test_list_friends_in_confirmation_order() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(
        &facade,
        &[("ana", "p1"), ("bia", "p2"), ("caio", "p3"), ("duda", "p4")],
    );

    // Invites go out in one order, acceptances arrive in another
    facade.request_friend(&sessions[0], "bia").unwrap();
    facade.request_friend(&sessions[0], "caio").unwrap();
    facade.request_friend(&sessions[0], "duda").unwrap();
    facade.request_friend(&sessions[3], "ana").unwrap();
    facade.request_friend(&sessions[1], "ana").unwrap();

    assert_eq!(facade.list_friends("ana").to_string(), "{duda,bia}");
    assert!(!facade.is_friend("ana", "caio"));
}

#[test]
fn test_list_friends_empty_and_unknown() {
    let (_dir, facade) = setup_facade();
    facade.create_account("ana", "p1", "").unwrap();

    assert_eq!(facade.list_friends("ana").to_string(), "{}");
    assert_eq!(facade.list_friends("ghost").to_string(), "{}");
    assert!(!facade.is_friend("ghost", "ana"));
    assert!(!facade.is_friend("ana", "ghost"));
}

#[test]
fn test_invitee_not_marked_pending() {
    let (_dir, instance) = setup_instance();
    instance.create_account("ana", "p1", "").unwrap();
    instance.create_account("bia", "p2", "").unwrap();
    let ana = instance.open_session("ana", "p1").unwrap();
    instance.request_friend(&ana, "bia").unwrap();

    let accounts = instance.accounts();
    let bia = accounts.iter().find(|a| a.login() == "bia").unwrap();
    assert!(bia.friendships().relation("ana").is_none());
    let ana_account = accounts.iter().find(|a| a.login() == "ana").unwrap();
    assert!(ana_account.has_invited("bia"));
}
