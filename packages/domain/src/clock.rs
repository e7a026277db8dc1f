//! # Clock（時刻プロバイダ）
//!
//! 記事の作成日時・更新日時をサービス側で割り当てる際に使う。
//! テストでは固定時刻を注入する。

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_は現在時刻を返す() {
        let before = Utc::now();
        let result = SystemClock.now();
        let after = Utc::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn test_fixed_clock_は常に同じ時刻を返す() {
        let fixed = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = FixedClock::new(fixed);

        assert_eq!(clock.now(), fixed);
        assert_eq!(clock.now(), fixed);
    }
}
