pub mod resolve_server;
