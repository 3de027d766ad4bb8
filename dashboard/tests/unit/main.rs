//! Integration tests against an in-process backend

mod mock_backend;
mod test_client;
mod test_dispatcher;
mod test_refresher;
mod test_server;
