//! Message delivery and FIFO consumption

use crate::helpers::*;

#[test]
fn test_messages_read_in_delivery_order() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2"), ("caio", "p3")]);

    facade.send_message(&sessions[1], "ana", "m1").unwrap();
    facade.send_message(&sessions[2], "ana", "m2").unwrap();
    facade.send_message(&sessions[1], "ana", "m3").unwrap();

    assert_eq!(facade.read_next_message(&sessions[0]).unwrap(), "m1");
    assert_eq!(facade.read_next_message(&sessions[0]).unwrap(), "m2");
    assert_eq!(facade.read_next_message(&sessions[0]).unwrap(), "m3");
    assert_eq!(
        facade.read_next_message(&sessions[0]).unwrap_err().reason(),
        "No messages."
    );
}

#[test]
fn test_friendship_not_required() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);

    facade.send_message(&sessions[0], "bia", "hello").unwrap();
    assert_eq!(facade.read_next_message(&sessions[1]).unwrap(), "hello");
}

#[test]
fn test_send_rejections() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);

    assert_eq!(
        facade
            .send_message(&sessions[0], "ana", "oi")
            .unwrap_err()
            .reason(),
        "An account cannot send a message to itself."
    );
    assert_eq!(
        facade
            .send_message(&sessions[0], "ghost", "oi")
            .unwrap_err()
            .reason(),
        "Account not registered."
    );
    assert_eq!(
        facade
            .send_message(&sessions[0], "bia", "   ")
            .unwrap_err()
            .reason(),
        "Message cannot be empty."
    );
    assert_eq!(
        facade.read_next_message(&sessions[1]).unwrap_err().reason(),
        "No messages."
    );
}

#[test]
fn test_inboxes_are_separate() {
    let (_dir, facade) = setup_facade();
    let sessions = with_sessions(&facade, &[("ana", "p1"), ("bia", "p2")]);

    facade.send_message(&sessions[0], "bia", "to bia").unwrap();
    facade.send_message(&sessions[1], "ana", "to ana").unwrap();

    assert_eq!(facade.read_next_message(&sessions[0]).unwrap(), "to ana");
    assert_eq!(facade.read_next_message(&sessions[1]).unwrap(), "to bia");
    assert_eq!(
        facade.instance().pending_messages("ana").unwrap(),
        0
    );
}
