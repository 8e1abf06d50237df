use crate::harness::TestApp;

/// Without a remembered wallet the app starts disconnected and shows the
/// connect prompt naming the available adapters and the cluster.
#[test]
fn test_app_startup_shows_connect_prompt() {
    let mut app = TestApp::new();
    app.steps(3);

    assert!(!app.context.session().is_connected());
    assert!(app.has_label("Connect your wallet to get started"));
    assert!(app.has_label("Use a Keypair File wallet on Devnet"));
    assert!(app.has_label("Select Wallet"));
    assert!(!app.harness.state().is_polling_balance());
    assert_eq!(app.cluster.balance_calls(), 0);
}
