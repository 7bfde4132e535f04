//! # Clock（時刻プロバイダ）
//!
//! Todo の `updated_at` を刻む時刻源。ストアに注入することで、
//! テストでは固定時刻や任意に進めた時刻を使える。

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

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

/// 呼び出すたびに一定間隔で進むテスト用実装
///
/// 更新のたびに `updated_at` が変わることを検証するために使う。
pub struct SteppingClock {
   next: Mutex<DateTime<Utc>>,
   step: Duration,
}

impl SteppingClock {
   pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
      Self {
         next: Mutex::new(start),
         step,
      }
   }
}

impl Clock for SteppingClock {
   fn now(&self) -> DateTime<Utc> {
      // ロックが汚染されていても時刻自体は有効なので、そのまま使う
      let mut next = self
         .next
         .lock()
         .unwrap_or_else(|poisoned| poisoned.into_inner());
      let now = *next;
      *next = now + self.step;
      now
   }
}
