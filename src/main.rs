use crate::auth::LoginGate;
use crate::router::handle;
use crate::state::AppState;
use crate::store::{seed_records, NominationStore};
use crate::submit::DelayedSubmitter;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

mod auth;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod state;
mod store;
mod submit;
mod templates;

#[cfg(test)]
mod tests;

// Stand-in latencies for the not-yet-real backend calls.
const LOGIN_DELAY: Duration = Duration::from_secs(1);
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

fn main() {
    // 1️⃣ Load the fixed sample nominations
    let records = match seed_records() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("❌ Failed to load seed nominations: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Seeded {} sample nominations", records.len());

    // 2️⃣ Assemble the shared application state
    let state = Arc::new(AppState::new(
        NominationStore::from_records(records),
        LoginGate::new(LOGIN_DELAY),
        Box::new(DelayedSubmitter::new(SUBMIT_DELAY)),
    ));

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
