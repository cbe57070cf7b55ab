//! Output seam for the checker report.
pub trait Printer {
    fn print(&self, output: &str);
    fn eprint(&self, output: &str);
    fn println(&self, output: &str);
    fn eprintln(&self, output: &str);
}
