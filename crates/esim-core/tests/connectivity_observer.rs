//! Connectivity observer integration tests
//!
//! Drives spawned observers through the in-process ManualConnectivity
//! source.

use std::sync::Arc;
use std::time::Duration;

use esim_core::{ConnectivityObserver, ConnectivityState, ManualConnectivity};
use tokio::sync::watch;
use tokio::time::timeout;

async fn wait_for(rx: &mut watch::Receiver<ConnectivityState>, expected: ConnectivityState) {
    timeout(Duration::from_secs(5), rx.wait_for(|state| *state == expected))
        .await
        .expect("timed out waiting for connectivity state")
        .expect("observer closed");
}

#[tokio::test]
async fn test_follows_lost_and_restored() {
    let source = Arc::new(ManualConnectivity::new(true));
    let handle = ConnectivityObserver::spawn(source.clone());
    let mut rx = handle.watch();
    assert_eq!(handle.state(), ConnectivityState::Online);

    source.go_offline();
    wait_for(&mut rx, ConnectivityState::Offline).await;

    source.go_online();
    wait_for(&mut rx, ConnectivityState::Online).await;
}

#[tokio::test]
async fn test_foreground_regained_matches_platform() {
    let source = Arc::new(ManualConnectivity::new(true));
    let handle = ConnectivityObserver::spawn(source.clone());
    let mut rx = handle.watch();

    // Connectivity dropped while backgrounded; the lost event never arrived.
    source.set_silently(Some(false));
    source.regain_foreground();
    wait_for(&mut rx, ConnectivityState::Offline).await;

    source.set_silently(Some(true));
    source.regain_foreground();
    wait_for(&mut rx, ConnectivityState::Online).await;

    // Signal vanished entirely: fail open.
    source.go_offline();
    wait_for(&mut rx, ConnectivityState::Offline).await;
    source.set_silently(None);
    source.regain_foreground();
    wait_for(&mut rx, ConnectivityState::Online).await;
}

#[tokio::test]
async fn test_observers_coexist() {
    let source = Arc::new(ManualConnectivity::new(true));
    let first = ConnectivityObserver::spawn(source.clone());
    let second = ConnectivityObserver::spawn(source.clone());
    assert_eq!(source.subscriber_count(), 2);

    let mut rx1 = first.watch();
    let mut rx2 = second.watch();
    source.go_offline();
    wait_for(&mut rx1, ConnectivityState::Offline).await;
    wait_for(&mut rx2, ConnectivityState::Offline).await;
}

#[tokio::test]
async fn test_shutdown_releases_subscription() {
    let source = Arc::new(ManualConnectivity::new(true));
    let handle = ConnectivityObserver::spawn(source.clone());
    let other = ConnectivityObserver::spawn(source.clone());
    assert_eq!(source.subscriber_count(), 2);

    handle.shutdown().await;
    assert_eq!(source.subscriber_count(), 1);

    // The remaining observer keeps working.
    let mut rx = other.watch();
    source.go_offline();
    wait_for(&mut rx, ConnectivityState::Offline).await;
}

#[tokio::test]
async fn test_lagged_listener_rereads_signal() {
    let source = Arc::new(ManualConnectivity::new(false));
    let handle = ConnectivityObserver::spawn(source.clone());
    let mut rx = handle.watch();
    assert_eq!(handle.state(), ConnectivityState::Offline);

    // Overflow the channel before the listener gets to run.
    source.set_silently(Some(true));
    for _ in 0..100 {
        source.regain_foreground();
    }
    wait_for(&mut rx, ConnectivityState::Online).await;
}
