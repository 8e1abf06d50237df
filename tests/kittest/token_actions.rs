use crate::harness::TestApp;
use solana_sdk::pubkey::Pubkey;
use std::sync::atomic::Ordering;

/// Submitting the create form without a name is rejected before any call.
#[test]
fn test_create_with_empty_name_is_rejected_locally() {
    let mut app = TestApp::new();
    app.connect();

    app.click("Create Token");
    app.steps(3);

    assert_eq!(app.token_program.create_mint_calls(), 0);
    assert!(app.messages().iter().any(|m| m == "Please fill all fields"));
    assert!(!app.harness.state().root_screen.is_loading());
}

/// A failing mint call surfaces the generic message and re-enables the form.
#[test]
fn test_failed_create_releases_loading_flag() {
    let mut app = TestApp::new();
    app.connect();
    app.token_program.fail.store(true, Ordering::SeqCst);

    app.submit_create("Gold", "gld");
    assert!(app.harness.state().root_screen.is_loading());
    app.wait_until_idle();

    assert_eq!(app.token_program.create_mint_calls(), 1);
    assert!(app.messages().iter().any(|m| m == "Failed to create token"));
    app.step();
    assert!(app.is_enabled("Create Token"));
}

/// Creating a token registers it and clears the form.
#[test]
fn test_create_token_records_mint() {
    let mut app = TestApp::new();
    app.connect();

    app.submit_create("Gold", "gld");
    app.wait_until_idle();

    let mints = app.context.registered_mints();
    assert_eq!(mints.len(), 1);
    assert_eq!(mints[0].symbol, "GLD");
    assert_eq!(mints[0].authority, app.wallet.address());

    let created = format!("Token created: {}", mints[0].mint);
    assert!(app.messages().contains(&created));

    let panel = app.harness.state_mut().root_screen.token_panel_mut();
    assert!(panel.name.is_empty() && panel.symbol.is_empty());
}

/// While one action is in flight every tab's submit button is disabled.
#[test]
fn test_pending_action_disables_all_submit_buttons() {
    let mut app = TestApp::new();
    app.connect();
    app.token_program.hold.store(true, Ordering::SeqCst);

    app.submit_create("Gold", "gld");
    app.step_until("create call", |app| {
        app.token_program.create_mint_calls() == 1
    });
    assert!(!app.is_enabled("Creating..."));

    app.click("Mint");
    assert!(!app.is_enabled("Minting..."));
    app.click("Send");
    assert!(!app.is_enabled("Sending..."));

    app.token_program.release();
    app.wait_until_idle();
    app.step();

    assert!(app.is_enabled("Send Tokens"));
    app.click("Mint");
    assert!(app.is_enabled("Mint Tokens"));
    app.click("Create");
    assert!(app.is_enabled("Create Token"));
}

/// Mint and send go through the form with the token's decimals.
#[test]
fn test_mint_and_send_through_form() {
    let mut app = TestApp::new();
    app.connect();
    app.submit_create("Gold", "gld");
    app.wait_until_idle();

    app.click("Mint");
    app.harness.state_mut().root_screen.token_panel_mut().mint_amount = "3".to_string();
    app.step();
    app.click("Mint Tokens");
    app.wait_until_idle();

    assert_eq!(app.token_program.minted(), vec![3_000_000_000]);
    assert!(app.messages().iter().any(|m| m.starts_with("Tokens minted: ")));
    assert!(app.harness.state_mut().root_screen.token_panel_mut().mint_amount.is_empty());

    app.click("Send");
    {
        let panel = app.harness.state_mut().root_screen.token_panel_mut();
        panel.recipient = Pubkey::new_unique().to_string();
        panel.send_amount = "1.5".to_string();
    }
    app.step();
    app.click("Send Tokens");
    app.wait_until_idle();

    assert!(app.messages().iter().any(|m| m.starts_with("Tokens sent: ")));
    let panel = app.harness.state_mut().root_screen.token_panel_mut();
    assert!(panel.recipient.is_empty() && panel.send_amount.is_empty());
}
