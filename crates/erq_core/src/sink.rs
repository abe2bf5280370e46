//! Fatal-condition sink for queue diagnostics.
//!
//! A queue borrows a [`FaultSink`] to report precondition violations and
//! allocation failures as human-readable lines. The sink is an external
//! collaborator: it is never owned by the queue, it may be absent (in which
//! case diagnostics are dropped silently), and nothing about queue
//! correctness depends on it. [`WriteSink`] adapts any `core::fmt::Write`
//! target behind a spinlock so a single statically allocated sink can be
//! shared by every queue in the system.

use core::cell::UnsafeCell;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Receiver for fatal-condition diagnostics.
///
/// Exposes a single operation: append one line of text. There is no return
/// value and no persistence guarantee; implementations are free to drop
/// lines when their transport is saturated.
pub trait FaultSink: Sync {
    /// Appends one line of text to the sink.
    fn line(&self, text: &str);
}

/// Spinlock for mutual exclusion in no_std environments.
///
/// Serializes access to the wrapped writer using an atomic flag and
/// busy-waiting, so diagnostic lines from different cores or interrupt
/// contexts do not interleave mid-line. The lock is released automatically
/// when the guard is dropped.
pub struct SpinLock<T> {
    /// False means unlocked, true means locked. Modified via
    /// compare-and-swap to ensure atomic acquisition.
    lock: AtomicBool,

    /// Protected data wrapped in UnsafeCell for interior mutability.
    data: UnsafeCell<T>,
}

/// The atomic lock flag ensures only one thread holds the lock at a time,
/// making concurrent access to the protected data safe.
unsafe impl<T: Send> Sync for SpinLock<T> {}

impl<T> SpinLock<T> {
    /// Creates a new spinlock in the unlocked state.
    pub const fn new(data: T) -> Self {
        Self {
            lock: AtomicBool::new(false),
            data: UnsafeCell::new(data),
        }
    }

    /// Acquires the lock, returning a guard that releases it on drop.
    ///
    /// Spins with compare-and-swap until acquisition succeeds. The guard
    /// provides mutable access to the protected data.
    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        while self
            .lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }
        SpinLockGuard {
            lock: &self.lock,
            data: &self.data,
        }
    }
}

/// Guard that holds a [`SpinLock`] and releases it on drop.
pub struct SpinLockGuard<'a, T> {
    lock: &'a AtomicBool,
    data: &'a UnsafeCell<T>,
}

impl<'a, T> core::ops::Deref for SpinLockGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Safety: the guard proves exclusive access for its lifetime.
        unsafe { &*self.data.get() }
    }
}

impl<'a, T> core::ops::DerefMut for SpinLockGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        // Safety: the guard proves exclusive access for its lifetime.
        unsafe { &mut *self.data.get() }
    }
}

impl<'a, T> Drop for SpinLockGuard<'a, T> {
    /// Releases the lock with release ordering so writes to the protected
    /// data are visible to the next holder.
    fn drop(&mut self) {
        self.lock.store(false, Ordering::Release);
    }
}

/// Sink adapter over any `core::fmt::Write` target.
///
/// Wraps the writer in a [`SpinLock`] so `line` can take `&self`, which is
/// what lets a `static` instance back every queue in the system. Formatting
/// errors are discarded: the sink contract promises neither delivery nor
/// persistence.
pub struct WriteSink<W> {
    writer: SpinLock<W>,
}

impl<W: fmt::Write> WriteSink<W> {
    /// Creates a sink that appends lines to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: SpinLock::new(writer),
        }
    }
}

impl<W: fmt::Write + Send> FaultSink for WriteSink<W> {
    fn line(&self, text: &str) {
        let mut w = self.writer.lock();
        let _ = w.write_str(text);
        let _ = w.write_str("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn spinlock_guards_mutation() {
        let lock = SpinLock::new(0u32);
        {
            let mut guard = lock.lock();
            *guard += 41;
            *guard += 1;
        }
        assert_eq!(*lock.lock(), 42);
    }

    #[test]
    fn write_sink_appends_lines() {
        let sink = WriteSink::new(String::new());
        sink.line("first");
        sink.line("second");
        assert_eq!(&*sink.writer.lock(), "first\nsecond\n");
    }
}
