//! Bounded set of live chat sessions.
//!
//! Sessions idle longer than the configured window are dropped when a new one
//! is opened; at capacity the least recently used session goes first.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::Conversation;

#[derive(Debug)]
struct Slot {
    conversation: Conversation,
    last_seen: DateTime<Utc>,
    last_used: u64,
}

#[derive(Debug)]
pub struct SessionStore {
    slots: HashMap<Uuid, Slot>,
    capacity: usize,
    idle: Option<TimeDelta>,
    tick: u64,
}

impl SessionStore {
    /// `capacity` is clamped to at least one session.
    pub fn new(capacity: usize, idle: Duration) -> Self {
        Self {
            slots: HashMap::new(),
            capacity: capacity.max(1),
            idle: TimeDelta::from_std(idle).ok(),
            tick: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Conversation> {
        self.slots.get(id).map(|slot| &slot.conversation)
    }

    /// Existing session, marked as used. Never creates one.
    pub fn touch(&mut self, id: &Uuid) -> Option<&mut Conversation> {
        self.touch_at(id, Utc::now())
    }

    pub fn touch_at(&mut self, id: &Uuid, now: DateTime<Utc>) -> Option<&mut Conversation> {
        self.tick += 1;
        let tick = self.tick;
        self.slots.get_mut(id).map(|slot| {
            slot.last_seen = now;
            slot.last_used = tick;
            &mut slot.conversation
        })
    }

    /// Existing session or a fresh one, making room first if needed.
    pub fn entry(&mut self, id: Uuid) -> &mut Conversation {
        self.entry_at(id, Utc::now())
    }

    pub fn entry_at(&mut self, id: Uuid, now: DateTime<Utc>) -> &mut Conversation {
        if !self.slots.contains_key(&id) {
            self.expire_idle(now);
            while self.slots.len() >= self.capacity {
                self.evict_least_recent();
            }
        }
        self.tick += 1;
        let slot = self.slots.entry(id).or_insert_with(|| Slot {
            conversation: Conversation::new(),
            last_seen: now,
            last_used: 0,
        });
        slot.last_seen = now;
        slot.last_used = self.tick;
        &mut slot.conversation
    }

    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.slots.remove(id).is_some()
    }

    /// Drop sessions not used since `now - idle`. Returns how many went.
    pub fn expire_idle(&mut self, now: DateTime<Utc>) -> usize {
        let Some(cutoff) = self.idle.and_then(|idle| now.checked_sub_signed(idle)) else {
            return 0;
        };
        let before = self.slots.len();
        self.slots.retain(|_, slot| slot.last_seen >= cutoff);
        let expired = before - self.slots.len();
        if expired > 0 {
            debug!(expired, "expired idle chat sessions");
        }
        expired
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .slots
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.slots.remove(&id);
            debug!(%id, "evicted chat session at capacity");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut store = SessionStore::new(2, HOUR);
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        store.entry(a).push_user("a");
        store.entry(b).push_user("b");
        store.entry(a).push_user("a again");
        store.entry(c).push_user("c");

        assert_eq!(store.len(), 2);
        assert!(store.get(&a).is_some());
        assert!(store.get(&b).is_none());
        assert!(store.get(&c).is_some());
    }

    #[test]
    fn test_idle_sessions_expire_when_a_new_one_opens() {
        let mut store = SessionStore::new(10, HOUR);
        let start = Utc::now();
        let (old, fresh) = (Uuid::new_v4(), Uuid::new_v4());
        store.entry_at(old, start).push_user("hi");

        let later = start + TimeDelta::hours(2);
        store.entry_at(fresh, later);
        assert!(store.get(&old).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_touch_keeps_session_alive() {
        let mut store = SessionStore::new(10, HOUR);
        let start = Utc::now();
        let id = Uuid::new_v4();
        store.entry_at(id, start);
        assert!(store.touch_at(&id, start + TimeDelta::minutes(50)).is_some());
        assert_eq!(store.expire_idle(start + TimeDelta::minutes(90)), 0);
        assert!(store.touch(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_remove_and_zero_capacity() {
        let mut store = SessionStore::new(0, HOUR);
        let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
        store.entry(first);
        store.entry(second);
        assert_eq!(store.len(), 1);
        assert!(!store.remove(&first));
        assert!(store.remove(&second));
        assert!(store.is_empty());
    }
}
