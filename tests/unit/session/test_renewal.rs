use marketdata_admin::session::{RenewalTicket, Session};

fn leader(session: &Session) -> marketdata_admin::session::RenewalGuard<'_> {
    match session.begin_renewal() {
        RenewalTicket::Leader(guard) => guard,
        RenewalTicket::Waiter(_) => panic!("expected to lead the renewal"),
    }
}

fn waiter(session: &Session) -> tokio::sync::oneshot::Receiver<Option<String>> {
    match session.begin_renewal() {
        RenewalTicket::Waiter(rx) => rx,
        RenewalTicket::Leader(_) => panic!("expected to queue behind the renewal"),
    }
}

#[tokio::test]
async fn test_first_caller_leads_and_others_wait() {
    let session = Session::in_memory();
    assert!(!session.is_renewing());

    let guard = leader(&session);
    assert!(session.is_renewing());

    let first = waiter(&session);
    let second = waiter(&session);
    assert_eq!(session.pending_waiters(), 2);

    guard.succeed("new-token".to_string());

    assert_eq!(first.await.unwrap().as_deref(), Some("new-token"));
    assert_eq!(second.await.unwrap().as_deref(), Some("new-token"));
    assert!(!session.is_renewing());
    assert_eq!(session.pending_waiters(), 0);
}

#[tokio::test]
async fn test_failed_renewal_releases_waiters_without_token() {
    let session = Session::in_memory();
    let guard = leader(&session);
    let queued = waiter(&session);

    guard.fail();

    assert_eq!(queued.await.unwrap(), None);
    assert!(!session.is_renewing());
}

#[tokio::test]
async fn test_dropped_guard_settles_as_failure() {
    let session = Session::in_memory();
    let queued = {
        let _guard = leader(&session);
        waiter(&session)
    };

    assert_eq!(queued.await.unwrap(), None);
    assert!(!session.is_renewing());
}

#[tokio::test]
async fn test_new_renewal_can_start_after_settling() {
    let session = Session::in_memory();
    leader(&session).fail();

    let guard = leader(&session);
    let queued = waiter(&session);
    guard.succeed("second".to_string());

    assert_eq!(queued.await.unwrap().as_deref(), Some("second"));
}

#[test]
fn test_dropped_waiter_does_not_block_settling() {
    let session = Session::in_memory();
    let guard = leader(&session);
    drop(waiter(&session));

    guard.succeed("token".to_string());
    assert!(!session.is_renewing());
    assert_eq!(session.pending_waiters(), 0);
}

#[test]
fn test_leader_records_credentials_epoch() {
    let session = Session::in_memory();
    session.clear_auth();

    let guard = leader(&session);
    assert_eq!(guard.epoch(), session.credentials_epoch());
    assert_eq!(guard.epoch(), 1);
}
