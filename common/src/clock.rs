//! 時刻の取得（写真IDの採番用）

use chrono::Utc;

pub trait Clock {
    /// UNIXエポックからのミリ秒
    fn now_millis(&self) -> i64;
}

/// 実時刻（WASMでは Date.now）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// 固定時刻（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
