use super::printer::Printer;

/// [`Printer`] writing to the process standard output and error streams.
#[derive(Default)]
pub struct Console {}

impl Printer for Console {
    fn print(&self, output: &str) {
        print!("{}", &output);
    }

    fn eprint(&self, output: &str) {
        eprint!("{}", &output);
    }

    fn println(&self, output: &str) {
        println!("{}", &output);
    }

    fn eprintln(&self, output: &str) {
        eprintln!("{}", &output);
    }
}
