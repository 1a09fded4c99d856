use std::io;

use tracing::{debug, info};

use crate::console::{LineInput, MessageSink, Severity};
use crate::customer::NewCustomer;
use crate::error::{RegistryError, ValidationError};
use crate::store::CustomerStore;
use crate::validation::{parse_menu_choice, validate_address, validate_name, validate_phone};

// =============================================================================
// Menu
// =============================================================================

pub const MENU: &str = "
    1) Add customer
    2) List customers
    3) Delete customer
    4) Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    List,
    Delete,
    Exit,
}

impl MenuOption {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuOption::Add),
            2 => Some(MenuOption::List),
            3 => Some(MenuOption::Delete),
            4 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Session state machine
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Adding,
    Listing,
    Deleting,
    Exited,
}

/// Interactive registry loop. Owns the store; all output goes through the sink.
pub struct Session<I, S> {
    title: String,
    store: CustomerStore,
    input: I,
    sink: S,
    state: SessionState,
}

impl<I: LineInput, S: MessageSink> Session<I, S> {
    pub fn new(title: impl Into<String>, store: CustomerStore, input: I, sink: S) -> Self {
        Session {
            title: title.into(),
            store,
            input,
            sink,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &CustomerStore {
        &self.store
    }

    pub fn into_parts(self) -> (CustomerStore, I, S) {
        (self.store, self.input, self.sink)
    }

    /// Loops until the user picks Exit or the input closes.
    pub fn run(&mut self) -> io::Result<()> {
        info!(customers = self.store.len(), "session started");
        while self.step()? {}
        info!(customers = self.store.len(), "session finished");
        Ok(())
    }

    /// One menu round. Returns `false` once the session has exited.
    pub fn step(&mut self) -> io::Result<bool> {
        if self.state == SessionState::Exited {
            return Ok(false);
        }

        self.sink.emit(Severity::Heading, &self.title);
        self.sink.emit(Severity::Info, MENU);

        let Some(raw) = self.read("Choose an option: ")? else {
            return Ok(false);
        };

        let number = match parse_menu_choice(&raw) {
            Ok(number) => number,
            Err(err) => {
                self.sink.error(&err.to_string());
                return Ok(true);
            }
        };

        match MenuOption::from_number(number) {
            Some(MenuOption::Add) => self.enter(SessionState::Adding, Self::add_customer)?,
            Some(MenuOption::List) => self.enter(SessionState::Listing, Self::list_customers)?,
            Some(MenuOption::Delete) => {
                self.enter(SessionState::Deleting, Self::delete_customer)?
            }
            Some(MenuOption::Exit) => {
                self.state = SessionState::Exited;
                return Ok(false);
            }
            None => self.sink.error("Invalid option"),
        }

        Ok(self.state != SessionState::Exited)
    }

    fn enter(
        &mut self,
        state: SessionState,
        action: fn(&mut Self) -> io::Result<()>,
    ) -> io::Result<()> {
        self.state = state;
        let result = action(self);
        if self.state == state {
            self.state = SessionState::Running;
        }
        result
    }

    fn read(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let line = self.input.read_line(prompt)?;
        if line.is_none() {
            debug!("input closed, ending session");
            self.state = SessionState::Exited;
        }
        Ok(line)
    }

    fn reject(&mut self, err: impl Into<RegistryError>) {
        let err = err.into();
        debug!(error = ?err, "operation rejected");
        self.sink.error(&err.to_string());
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    pub fn add_customer(&mut self) -> io::Result<()> {
        let Some(name) = self.read("Enter the customer's name: ")? else {
            return Ok(());
        };
        if let Err(err) = validate_name(&name) {
            self.reject(err);
            return Ok(());
        }
        if self.store.contains_name(&name) {
            self.reject(RegistryError::duplicate_name(name));
            return Ok(());
        }

        let Some(address) = self.read("Enter the address: ")? else {
            return Ok(());
        };
        if let Err(err) = validate_address(&address) {
            self.reject(err);
            return Ok(());
        }

        let Some(phone) = self.read("Enter the phone number: ")? else {
            return Ok(());
        };
        let phone = match validate_phone(&phone) {
            Ok(phone) => phone,
            Err(err) => {
                self.reject(err);
                return Ok(());
            }
        };

        let customer = NewCustomer::from_validated(name, address, phone);
        match self.store.add(customer).map(|_| ()) {
            Ok(()) => self.sink.success("Customer added successfully."),
            Err(err) => self.reject(err),
        }
        Ok(())
    }

    pub fn list_customers(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            self.sink.error("No customers to show.");
            return Ok(());
        }

        self.sink
            .info(&format!("Number of customers: {}", self.store.len()));
        for customer in self.store.customers() {
            self.sink.emit(Severity::Info, &customer.to_string());
        }
        Ok(())
    }

    pub fn delete_customer(&mut self) -> io::Result<()> {
        let Some(name) = self.read("Enter the name of the customer to delete: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            self.reject(ValidationError::EmptyName);
            return Ok(());
        }

        match self.store.remove_by_name(&name) {
            Ok(removed) => self
                .sink
                .success(&format!("Customer removed: {}", removed.name)),
            Err(err) => self.reject(err),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedInput {
        lines: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            ScriptedInput {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineInput for ScriptedInput {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        messages: Vec<(Severity, String)>,
    }

    impl RecordingSink {
        fn last(&self) -> &(Severity, String) {
            self.messages.last().expect("no messages emitted")
        }
    }

    impl MessageSink for RecordingSink {
        fn emit(&mut self, severity: Severity, message: &str) {
            self.messages.push((severity, message.to_string()));
        }
    }

    fn session(lines: &[&str]) -> Session<ScriptedInput, RecordingSink> {
        Session::new(
            "TEST",
            CustomerStore::default(),
            ScriptedInput::new(lines),
            RecordingSink::default(),
        )
    }

    #[test]
    fn test_menu_option_mapping() {
        assert_eq!(MenuOption::from_number(1), Some(MenuOption::Add));
        assert_eq!(MenuOption::from_number(4), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_number(0), None);
        assert_eq!(MenuOption::from_number(5), None);
    }

    #[test]
    fn test_exit_option_ends_session() {
        let mut s = session(&["4"]);
        assert!(!s.step().unwrap());
        assert_eq!(s.state(), SessionState::Exited);
        assert!(!s.step().unwrap());
    }

    #[test]
    fn test_non_numeric_choice_reports_and_continues() {
        let mut s = session(&["abc"]);
        assert!(s.step().unwrap());
        assert_eq!(s.state(), SessionState::Running);
        let (severity, message) = s.sink.last();
        assert_eq!(*severity, Severity::Error);
        assert!(message.contains("must be a number"));
    }

    #[test]
    fn test_out_of_range_choice_is_invalid_option() {
        let mut s = session(&["7"]);
        assert!(s.step().unwrap());
        assert_eq!(s.sink.last(), &(Severity::Error, "Invalid option".to_string()));
    }

    #[test]
    fn test_add_success_returns_to_running() {
        let mut s = session(&["1", "Ana", "Calle 1", "123"]);
        assert!(s.step().unwrap());
        assert_eq!(s.state(), SessionState::Running);
        assert_eq!(s.store().len(), 1);
        assert_eq!(
            s.sink.last(),
            &(Severity::Success, "Customer added successfully.".to_string())
        );
    }

    #[test]
    fn test_invalid_name_aborts_before_asking_address() {
        let mut s = session(&["1", "Juan1", "Calle 1", "123"]);
        s.step().unwrap();
        assert!(s.store().is_empty());
        assert_eq!(s.input.prompts.len(), 2);
        assert_eq!(s.sink.last().0, Severity::Error);
    }

    #[test]
    fn test_duplicate_name_aborts_add() {
        let mut s = session(&["1", "Ana", "Calle 1", "123", "1", "Ana"]);
        s.step().unwrap();
        s.step().unwrap();
        assert_eq!(s.store().len(), 1);
        assert!(s.sink.last().1.contains("already exists"));
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut s = session(&["1", "Ana", "Calle 1", "12"]);
        s.step().unwrap();
        assert!(s.store().is_empty());
        assert!(s.sink.last().1.contains("at least 3 digits"));
    }

    #[test]
    fn test_empty_address_rejected() {
        let mut s = session(&["1", "Ana", ""]);
        s.step().unwrap();
        assert!(s.store().is_empty());
        assert!(s.sink.last().1.contains("address"));
    }

    #[test]
    fn test_capacity_checked_after_fields() {
        let store = CustomerStore::new(1);
        let mut s = Session::new(
            "TEST",
            store,
            ScriptedInput::new(&["1", "Ana", "Calle 1", "123", "1", "Luis", "Calle 2", "456"]),
            RecordingSink::default(),
        );
        s.step().unwrap();
        s.step().unwrap();
        assert_eq!(s.store().len(), 1);
        assert_eq!(s.input.prompts.len(), 8);
        assert!(s.sink.last().1.contains("maximum number of customers"));
    }

    #[test]
    fn test_list_empty_store() {
        let mut s = session(&["2"]);
        s.step().unwrap();
        assert_eq!(
            s.sink.last(),
            &(Severity::Error, "No customers to show.".to_string())
        );
    }

    #[test]
    fn test_delete_empty_name() {
        let mut s = session(&["3", ""]);
        s.step().unwrap();
        assert!(s.sink.last().1.contains("cannot be empty"));
    }

    #[test]
    fn test_delete_missing_name() {
        let mut s = session(&["1", "Ana", "Calle 1", "123", "3", "Pedro"]);
        s.step().unwrap();
        s.step().unwrap();
        assert_eq!(s.store().len(), 1);
        assert_eq!(
            s.sink.last(),
            &(Severity::Error, "Customer 'Pedro' not found.".to_string())
        );
    }

    #[test]
    fn test_input_closed_mid_add_ends_session() {
        let mut s = session(&["1", "Ana"]);
        assert!(!s.step().unwrap());
        assert_eq!(s.state(), SessionState::Exited);
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut s = session(&["2", "9"]);
        s.run().unwrap();
        assert_eq!(s.state(), SessionState::Exited);
    }
}
