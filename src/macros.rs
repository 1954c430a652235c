//! Small crate-wide convenience macros.

/// Log a formatted line at debug level.  In the browser it goes to
/// `console.log`; elsewhere it goes through the `log` facade, so the host
/// picks the logger and the filter.
///
/// ```rust,ignore
/// debug_log!("dispatch {:?} -> {}", action, changed);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!(target: "social_preview_state", $($arg)*);
        }
    }};
}

pub(crate) use debug_log;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::messages::Action;
    use crate::reducers::social_preview::social_previews_router;
    use crate::state::Store;

    struct Capture {
        lines: Mutex<Vec<(Level, String, String)>>,
    }

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.lines.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn unmatched_dispatch_logs_through_log_facade() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Debug);

        let mut store = Store::new(social_previews_router().unwrap());
        store.dispatch(&Action::set_title("mastodon", "T"));

        let lines = CAPTURE.lines.lock().unwrap();
        assert!(lines.iter().any(|(level, target, text)| {
            *level == Level::Debug
                && target == "social_preview_state"
                && text.contains("'mastodon'")
        }));
    }
}
