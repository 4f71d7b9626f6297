use std::fmt;

pub mod argparse;

pub const EXIT_FAILURE: i32 = 1;

/// Unwraps a value at the binary's boundary, reporting the failure on stderr and terminating
/// the process with `EXIT_FAILURE` instead of panicking.
pub trait OrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E: fmt::Display> OrExit<T> for Result<T, E> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Err(why) => exit_with(why),
            Ok(value) => value
        }
    }
}

impl<T> OrExit<T> for Option<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            None => exit_with("[Error] expected a value but found none"),
            Some(value) => value
        }
    }
}

pub fn exit_with<M: fmt::Display>(msg: M) -> ! {
    eprintln!("{}", msg);
    std::process::exit(EXIT_FAILURE);
}
