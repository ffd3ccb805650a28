use chrono::{DateTime, Local, NaiveDateTime, Utc};

// Current local wall-clock time without a zone, as the camera clock expects
pub fn current_local_naive() -> NaiveDateTime {
    let now: DateTime<Local> = Local::now();
    now.naive_local()
}

// Milliseconds since the Unix epoch, used for generated preset ids
pub fn current_unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}
