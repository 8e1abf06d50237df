pub mod amount_input;
pub mod balance_panel;
pub mod connect_control;
pub mod notifications;
pub mod styled;
pub mod token_action_panel;
