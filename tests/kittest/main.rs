mod connect;
mod fakes;
mod harness;
mod startup;
mod token_actions;
