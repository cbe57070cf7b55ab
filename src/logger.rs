use std::cell::RefCell;

use super::printer::Printer;

/// [`Printer`] capturing all output in memory. Tests use it to assert on
/// the report without reading the real process streams.
#[derive(Default)]
pub struct Logger {
    output: RefCell<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}

#[cfg(test)]
mod tests {
    use crate::logger::Logger;
    use crate::printer::Printer;

    #[test]
    fn it_should_capture_the_print_command_output() {
        let console_logger = Logger::new();

        console_logger.print("OUTPUT");

        assert_eq!("OUTPUT", console_logger.log());
    }

    #[test]
    fn it_should_append_a_newline_for_println() {
        let console_logger = Logger::new();

        console_logger.println("first");
        console_logger.eprintln("second");

        assert_eq!("first\nsecond\n", console_logger.log());
    }
}
