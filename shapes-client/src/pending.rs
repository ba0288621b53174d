use std::cell::Cell;

/// Counts a remote operation as in flight for as long as the guard lives. Overlapping calls of
/// the same operation each hold their own guard.
pub struct PendingGuard<'a> {
    count: &'a Cell<usize>,
}

impl<'a> PendingGuard<'a> {
    pub fn new(count: &'a Cell<usize>) -> Self {
        count.set(count.get() + 1);
        Self { count }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.count.set(self.count.get().saturating_sub(1));
    }
}

/// Account mutations a form can have in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateAccount,
    SignIn,
}

/// In-flight calls of the account mutations of a form. The session check tracks its own calls
/// on the [SessionContext][crate::session::SessionContext].
#[derive(Debug, Default)]
pub struct PendingOperations {
    creating_account: Cell<usize>,
    signing_in: Cell<usize>,
}

impl PendingOperations {
    /// Count `operation` as pending until the returned guard is dropped
    pub fn track(&self, operation: Operation) -> PendingGuard<'_> {
        PendingGuard::new(match operation {
            Operation::CreateAccount => &self.creating_account,
            Operation::SignIn => &self.signing_in,
        })
    }

    pub fn is_any(&self) -> bool {
        self.creating_account.get() > 0 || self.signing_in.get() > 0
    }
}
