//! A shared Instance used from several threads

use std::{
    sync::{Arc, Barrier},
    thread,
};

use crate::helpers::*;

#[test]
fn test_concurrent_registration_of_same_login() {
    let (_dir, instance) = setup_instance();
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let instance = instance.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                instance.create_account("ana", &format!("pw{i}"), "").is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(instance.account_count(), 1);
}

#[test]
fn test_crossing_requests_end_confirmed() {
    // Both sides invite each other at the same moment. Whichever request is
    // applied second sees the other's invite and confirms.
    for _ in 0..20 {
        let (_dir, instance) = setup_instance();
        instance.create_account("ana", "p1", "").unwrap();
        instance.create_account("bia", "p2", "").unwrap();
        let ana = instance.open_session("ana", "p1").unwrap();
        let bia = instance.open_session("bia", "p2").unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = [(ana, "bia"), (bia, "ana")]
            .into_iter()
            .map(|(session, peer)| {
                let instance = instance.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    instance.request_friend(&session, peer)
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert!(instance.is_friend("ana", "bia"));
        assert!(instance.is_friend("bia", "ana"));
        assert_eq!(instance.friends("ana"), vec!["bia"]);
        assert_eq!(instance.friends("bia"), vec!["ana"]);
    }
}

#[test]
fn test_concurrent_senders_all_delivered() {
    let (_dir, instance) = setup_instance();
    instance.create_account("inbox", "pw", "").unwrap();
    let senders: Vec<String> = (0..6)
        .map(|i| {
            let login = format!("sender{i}");
            instance.create_account(&login, "pw", "").unwrap();
            instance.open_session(&login, "pw").unwrap()
        })
        .collect();

    let handles: Vec<_> = senders
        .into_iter()
        .map(|session| {
            let instance = instance.clone();
            thread::spawn(move || {
                for n in 0..25 {
                    instance
                        .send_message(&session, "inbox", &format!("msg {n}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(instance.pending_messages("inbox").unwrap(), 150);
}

#[test]
fn test_reset_racing_shutdown_leaves_disk_matching_memory() {
    let (_dir, instance) = setup_instance();
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let instance = instance.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..50 {
                instance
                    .create_account(&format!("user{i}"), "pw", "")
                    .unwrap();
                instance.shutdown().unwrap();
            }
        })
    };
    let resetter = {
        let instance = instance.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..50 {
                instance.reset_all().unwrap();
            }
        })
    };
    writer.join().unwrap();
    resetter.join().unwrap();

    // Whichever operation ran last, the stored table matches memory
    let mut in_memory: Vec<String> = instance
        .accounts()
        .iter()
        .map(|account| account.login().to_string())
        .collect();
    in_memory.sort();
    let on_disk = instance.persistence().load().unwrap().logins();
    assert_eq!(on_disk, in_memory);
}
