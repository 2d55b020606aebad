//! Periodic heartbeat output
//!
//! Proves a long-running process stays alive by printing a numbered beat
//! with the wall-clock time on every tick.

use chrono::{Local, NaiveTime};
use log::debug;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

pub const GREETING: &str = "Hello World from Railway!";

/// Text of a single beat, three lines with trailing newline
pub fn format_beat(counter: u64, time: NaiveTime) -> String {
    format!(
        "[{}] {}\nTime: {}\n{}\n",
        counter,
        GREETING,
        time.format("%H:%M:%S"),
        "=".repeat(40)
    )
}

/// Write a beat every `interval`. Stops after `limit` beats when given,
/// otherwise runs until the task is dropped. Returns the beats written.
pub async fn run<W: Write>(interval: Duration, limit: Option<u64>, out: &mut W) -> io::Result<u64> {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut counter = 0u64;
    loop {
        if limit.is_some_and(|max| counter >= max) {
            return Ok(counter);
        }

        ticker.tick().await;
        counter += 1;
        out.write_all(format_beat(counter, Local::now().time()).as_bytes())?;
        out.flush()?;
        debug!("Heartbeat {}", counter);
    }
}
