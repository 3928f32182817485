/// How long a success/error notice stays on the status line.
pub const NOTICE_CLEAR_MS: u64 = 3000;

/// Event-loop poll interval for terminal input.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C window for exiting.
pub const CTRL_C_EXIT_WINDOW_MS: u64 = 1000;
