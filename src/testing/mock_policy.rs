//! MockAccessPolicy for testing with expectations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::access::{AccessDecision, AccessPolicy, TrustLevel};

/// A mock access policy for testing.
///
/// `MockAccessPolicy` lets you script decisions for specific
/// (subject, required) pairs and verify that they were consulted.
/// Unscripted pairs fall back to the default decision.
///
/// ## Example
///
/// ```rust
/// use marketguard::testing::MockAccessPolicy;
/// use marketguard::{AccessPolicy, TrustLevel};
///
/// let mock = MockAccessPolicy::new()
///     .expect_decide(TrustLevel::Sandbox, TrustLevel::Core, true);
///
/// // A real trust scale would deny this; the mock allows it.
/// assert!(mock.decide(TrustLevel::Sandbox, TrustLevel::Core).is_allowed());
/// mock.verify();
/// ```
#[derive(Clone)]
pub struct MockAccessPolicy {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    default_allow: bool,
}

#[derive(Debug, Clone)]
struct Expectation {
    subject: TrustLevel,
    required: TrustLevel,
    allowed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Call {
    subject: TrustLevel,
    required: TrustLevel,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAccessPolicy {
    /// Creates a mock policy that denies unscripted pairs.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            default_allow: false,
        }
    }

    /// Creates a mock policy that allows unscripted pairs.
    pub fn allow_all() -> Self {
        Self { default_allow: true, ..Self::new() }
    }

    /// Creates a mock policy that denies unscripted pairs.
    pub fn deny_all() -> Self {
        Self::new()
    }

    /// Scripts the decision for a (subject, required) pair.
    #[must_use]
    pub fn expect_decide(self, subject: TrustLevel, required: TrustLevel, allowed: bool) -> Self {
        lock(&self.expectations).push(Expectation {
            subject,
            required,
            allowed,
        });
        self
    }

    /// Verifies that every scripted pair was consulted at least once.
    ///
    /// # Panics
    ///
    /// Panics if any expectation was not met.
    pub fn verify(&self) {
        let expectations = lock(&self.expectations);
        let calls = lock(&self.calls);

        for expectation in expectations.iter() {
            let called = calls
                .iter()
                .any(|c| c.subject == expectation.subject && c.required == expectation.required);
            assert!(
                called,
                "Expected decide({}, {}) was never called",
                expectation.subject, expectation.required
            );
        }
    }

    /// Returns the number of decisions made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Clears all expectations and recorded calls.
    pub fn reset(&self) {
        lock(&self.expectations).clear();
        lock(&self.calls).clear();
    }

    fn find_result(&self, subject: TrustLevel, required: TrustLevel) -> bool {
        lock(&self.expectations)
            .iter()
            .find(|e| e.subject == subject && e.required == required)
            .map_or(self.default_allow, |e| e.allowed)
    }
}

impl Default for MockAccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessPolicy for MockAccessPolicy {
    fn decide(&self, subject: TrustLevel, required: TrustLevel) -> AccessDecision {
        lock(&self.calls).push(Call { subject, required });
        if self.find_result(subject, required) {
            AccessDecision::allowed(subject)
        } else {
            AccessDecision::denied(subject, required)
        }
    }
}
