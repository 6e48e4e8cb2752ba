//! Test Units
//!
//! A test is a name plus the closure to measure. The closure takes no
//! arguments and returns nothing; anything it needs it must capture.
//! The engine measures wall time and nothing else, so work that the
//! optimizer can see through should be pinned with
//! [`std::hint::black_box`] by the caller.

/// A named unit of code to benchmark.
pub struct Test {
    name: String,
    action: Box<dyn FnMut()>,
}

impl Test {
    /// Create a test from a name and a zero-argument closure.
    ///
    /// Names are not required to be unique; reporters line columns up
    /// by position, not by name. Duplicate names do collide in export
    /// file paths, so runs that export should keep them distinct.
    pub fn new(name: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// The test's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the action once.
    pub(crate) fn run(&mut self) {
        (self.action)()
    }

    /// Consume the test, yielding its name.
    pub(crate) fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Debug for Test {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Test")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_name_accessor() {
        let t = Test::new("baseline", || {});
        assert_eq!(t.name(), "baseline");
    }

    #[test]
    fn test_action_sees_captured_state() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut t = Test::new("counting", move || {
            counter.set(counter.get() + 1);
        });

        t.run();
        t.run();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_debug_omits_the_closure() {
        let t = Test::new("fmt", || {});
        let rendered = format!("{:?}", t);
        assert!(rendered.contains("fmt"));
    }
}
