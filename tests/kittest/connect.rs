use crate::harness::TestApp;
use sol_token_tool::model::session::truncate_address;

/// Connecting shows the address once, raises exactly one success toast and
/// starts polling the balance.
#[test]
fn test_connect_shows_address_and_balance() {
    let mut app = TestApp::new();
    app.connect();

    let address = app.wallet.address();
    assert_eq!(app.context.session().address, Some(address));

    let short = truncate_address(&address.to_string());
    let connected = format!("Connected: {}", short);
    let messages = app.messages();
    assert_eq!(
        messages.iter().filter(|m| **m == connected).count(),
        1,
        "messages: {:?}",
        messages
    );

    app.step();
    assert!(app.has_label(&short));
    assert!(app.has_label("2.5000 SOL"));
    assert!(app.has_label("No tokens found"));
    assert!(!app.has_label("Connect your wallet to get started"));
}

/// Redrawing with an unchanged session does not hit the cluster again.
#[test]
fn test_rerender_issues_no_remote_calls() {
    let mut app = TestApp::new();
    app.connect();
    let calls = app.cluster.balance_calls();

    app.steps(30);

    assert_eq!(app.cluster.balance_calls(), calls);
    assert_eq!(app.token_program.create_mint_calls(), 0);
}

/// Disconnecting stops the poller and brings back the connect prompt.
#[test]
fn test_disconnect_stops_polling() {
    let mut app = TestApp::new();
    app.connect();

    app.click("Disconnect");
    app.step_until("disconnect", |app| !app.context.session().is_connected());
    app.step();

    assert!(!app.harness.state().is_polling_balance());
    assert!(app.has_label("Connect your wallet to get started"));
    assert!(app.harness.state().root_screen.balance_panel().snapshot().is_none());
}
