pub mod balance_poller;
