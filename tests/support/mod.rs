pub mod intuit_server;
