use log::{debug, error, info, warn};

fn main() {
    // Route the log crate's macros through the console format
    linelog::bridge::init(linelog::default_logger()).expect("no logger installed yet");

    info!("server started");
    warn!("disk low");
    error!("connection lost");

    // debug has no severity of its own here, so it logs at info
    debug!("cache miss");
}
