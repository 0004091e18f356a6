use std::io::{self, Write};

/// Output wrapper for printing dispatch results.
///
/// Holds references to the following file descriptors:
///  - Standard output (file descriptor 1).
///  - Standard error (file descriptor 2).
///
/// # Examples
///
/// Output can be written using the standard [`write!`] and [`writeln!`] macros.
/// ```
/// use std::io::Write;
/// use dispatch_core::command::Io;
///
/// let mut io = Io::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()));
/// writeln!(io.stdout, "This line is printed to standard output.").unwrap();
/// writeln!(io.stderr, "This line is printed to standard error.").unwrap();
/// ```
pub struct Io {
    /// File descriptor for standard output.
    pub stdout: Box<dyn io::Write + Send>,
    /// File descriptor for standard error.
    pub stderr: Box<dyn io::Write + Send>,
}

impl Io {
    /// Constructs a new output wrapper.
    pub fn new(stdout: Box<dyn io::Write + Send>, stderr: Box<dyn io::Write + Send>) -> Self {
        Self { stdout, stderr }
    }

    /// Constructs an output wrapper for the process' own standard output and error.
    pub fn std() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Writes an optional result as a single line to standard output.
    ///
    /// Absent results produce no output at all.
    pub fn print_result(&mut self, result: Option<&str>) -> io::Result<()> {
        if let Some(line) = result {
            writeln!(self.stdout, "{line}")?;
            self.stdout.flush()?;
        }
        Ok(())
    }
}
