//! Deferred registration: build an ordered list of tests, run it later.

use termcolor::WriteColor;

use crate::errors::CheckError;
use crate::harness::Harness;

type Action<'a> = Box<dyn FnOnce() -> Result<(), CheckError> + 'a>;

/// A named test action. It runs at most once.
pub struct TestCase<'a> {
    pub name: String,
    action: Action<'a>,
}

impl<'a> TestCase<'a> {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> Result<(), CheckError> + 'a,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }
}

impl std::fmt::Debug for TestCase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Tests in registration order.
#[derive(Debug, Default)]
pub struct Suite<'a> {
    title: String,
    cases: Vec<TestCase<'a>>,
}

impl<'a> Suite<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cases: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), CheckError> + 'a,
    {
        self.cases.push(TestCase::new(name, action));
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }

    /// Prints the banner and executes every case, in order, on `harness`.
    pub fn run<W: WriteColor>(self, harness: &mut Harness<W>) {
        harness.start(&self.title);
        for case in self.cases {
            harness.test(&case.name, case.action);
        }
    }
}
